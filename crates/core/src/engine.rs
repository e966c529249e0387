//! Turn sequencing over [`GameState`].
//!
//! [`TurnEngine`] is the authoritative reducer: every gameplay event flows
//! through [`TurnEngine::execute`], guards run before any mutation, and the
//! returned [`TurnReport`] tells the caller what happened, including which
//! persistence checkpoint a finalized turn requires. The engine itself never
//! touches I/O.

use rand::Rng;

use crate::category::ScoreOption;
use crate::error::{GameError, Result};
use crate::state::{GameState, MatchOutcome, Phase, REROLLS_PER_TURN};

/// A gameplay request from the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// Reroll the active player's non-held dice.
    Roll,
    /// Flip the hold flag of die `die` (1-based, 1..=5).
    ToggleHold { die: usize },
    /// Stop rolling; move to category selection (or finalize when the
    /// active player has nothing left to score).
    EndTurn,
    /// Pick entry `position` (1-based) from the open-category list.
    Select { position: usize },
}

/// What an accepted event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnReport {
    DiceRolled { rerolls_remaining: u8 },
    HoldToggled { die: usize },
    /// The turn entered selection; `options` is the numbered list the
    /// player must now choose from.
    SelectionOpened { options: Vec<ScoreOption> },
    /// The turn finalized. With `outcome: None` the game continues and the
    /// caller should checkpoint the state; with `Some` the game is over and
    /// the saved snapshot should be deleted instead.
    TurnFinalized {
        scored: Option<ScoreOption>,
        outcome: Option<MatchOutcome>,
    },
}

/// Reducer borrowing the state for the duration of one event.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Routes one event through its guards and applies it.
    ///
    /// On error the state is exactly as it was before the call; the caller
    /// reports the rejection and waits for the next event.
    pub fn execute(&mut self, event: TurnEvent, rng: &mut impl Rng) -> Result<TurnReport> {
        match event {
            TurnEvent::Roll => self.roll(rng),
            TurnEvent::ToggleHold { die } => self.toggle_hold(die),
            TurnEvent::EndTurn => self.end_turn(),
            TurnEvent::Select { position } => self.select(position),
        }
    }

    fn roll(&mut self, rng: &mut impl Rng) -> Result<TurnReport> {
        self.require_phase(Phase::AwaitingRoll, "roll")?;
        if self.state.rerolls_remaining == 0 {
            return Err(GameError::OutOfRerolls);
        }
        self.state.active_player_mut().dice.roll(rng);
        self.state.rerolls_remaining -= 1;
        Ok(TurnReport::DiceRolled {
            rerolls_remaining: self.state.rerolls_remaining,
        })
    }

    fn toggle_hold(&mut self, die: usize) -> Result<TurnReport> {
        self.require_phase(Phase::AwaitingRoll, "toggle hold")?;
        self.state.active_player_mut().dice.toggle_hold(die)?;
        Ok(TurnReport::HoldToggled { die })
    }

    fn end_turn(&mut self) -> Result<TurnReport> {
        self.require_phase(Phase::AwaitingRoll, "end turn")?;
        let options = self.state.active_player().options();
        if options.is_empty() {
            // Nothing left to score for this player; the turn passes with
            // no selection step.
            return Ok(self.finalize(None));
        }
        self.state.phase = Phase::AwaitingSelection;
        Ok(TurnReport::SelectionOpened { options })
    }

    fn select(&mut self, position: usize) -> Result<TurnReport> {
        self.require_phase(Phase::AwaitingSelection, "select")?;
        let options = self.state.active_player().options();
        if position == 0 || position > options.len() {
            return Err(GameError::SelectionOutOfRange {
                position,
                available: options.len(),
            });
        }
        let chosen = options[position - 1];
        self.state
            .active_player_mut()
            .apply_option(chosen.category, chosen.score)?;
        Ok(self.finalize(Some(chosen)))
    }

    /// Atomic end-of-turn step: rotate the active seat, release all holds,
    /// restore the reroll budget, then check for game over. The machine
    /// never rests between a concluded selection and this step.
    fn finalize(&mut self, scored: Option<ScoreOption>) -> TurnReport {
        self.state.rotate_active();
        for player in &mut self.state.players {
            player.reset_dice();
        }
        self.state.rerolls_remaining = REROLLS_PER_TURN;
        self.state.phase = Phase::AwaitingRoll;

        let outcome = self.state.outcome();
        if outcome.is_some() {
            self.state.phase = Phase::GameOver;
        }
        TurnReport::TurnFinalized { scored, outcome }
    }

    fn require_phase(&self, expected: Phase, event: &'static str) -> Result<()> {
        if self.state.phase != expected {
            return Err(GameError::WrongPhase {
                event,
                phase: self.state.phase,
            });
        }
        Ok(())
    }
}
