//! Whole-game state: both players, the reroll budget, and the phase.

use rand::Rng;

use crate::error::{GameError, Result};
use crate::player::Player;

/// Number of participants. The rules are written for exactly two.
pub const PLAYER_COUNT: usize = 2;

/// Rolls available per turn. Restored to this value at every turn boundary.
pub const REROLLS_PER_TURN: u8 = 2;

/// Where the turn machine currently rests.
///
/// Turn completion is not a resting phase: a concluded selection finalizes
/// the turn inside the same engine call and lands back here or in
/// [`Phase::GameOver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The active player may roll, toggle holds, or end the turn.
    AwaitingRoll,
    /// The active player must pick one of their open categories.
    AwaitingSelection,
    /// Both scorecards are full; no further events are accepted.
    GameOver,
}

/// Final result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Strictly greater total. `winner` indexes into [`GameState::players`].
    Win { winner: usize },
    /// Equal totals.
    Draw,
}

/// The canonical game state. All mutation flows through
/// [`crate::engine::TurnEngine`]; everything else only reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub players: [Player; PLAYER_COUNT],
    /// Index of the player whose turn it is.
    pub active: usize,
    pub rerolls_remaining: u8,
    pub phase: Phase,
}

impl GameState {
    /// Starts a fresh game: empty scorecards, player one active, and both
    /// dice sets rolled once so the opening turn has real faces on the
    /// table.
    pub fn new(player_one: &str, player_two: &str, rng: &mut impl Rng) -> Self {
        Self {
            players: [Player::new(player_one, rng), Player::new(player_two, rng)],
            active: 0,
            rerolls_remaining: REROLLS_PER_TURN,
            phase: Phase::AwaitingRoll,
        }
    }

    /// Rebuilds a state from restored parts, e.g. a decoded save.
    ///
    /// The reroll budget and active index are validated here; a restored
    /// game always resumes in [`Phase::AwaitingRoll`] because saves only
    /// happen at turn boundaries or on quit.
    pub fn from_parts(
        players: [Player; PLAYER_COUNT],
        active: usize,
        rerolls_remaining: u8,
    ) -> Result<Self> {
        if rerolls_remaining > REROLLS_PER_TURN {
            return Err(GameError::InvalidRerollCount {
                count: rerolls_remaining,
            });
        }
        if active >= PLAYER_COUNT {
            return Err(GameError::InvalidActivePlayer { index: active });
        }
        Ok(Self {
            players,
            active,
            rerolls_remaining,
            phase: Phase::AwaitingRoll,
        })
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn active_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    /// Index of the player currently waiting for their turn.
    pub fn idle_index(&self) -> usize {
        (self.active + 1) % PLAYER_COUNT
    }

    /// Hands the turn to the other player.
    pub fn rotate_active(&mut self) {
        self.active = self.idle_index();
    }

    /// True once every category is scored for both players.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }

    /// The match result, available only once the game is over.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.is_game_over() {
            return None;
        }
        let totals = [self.players[0].total_score(), self.players[1].total_score()];
        let outcome = if totals[0] > totals[1] {
            MatchOutcome::Win { winner: 0 }
        } else if totals[1] > totals[0] {
            MatchOutcome::Win { winner: 1 }
        } else {
            MatchOutcome::Draw
        };
        Some(outcome)
    }
}
