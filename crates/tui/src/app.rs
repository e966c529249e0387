//! Application state and the synchronous event loop.
//!
//! The loop is draw, block on the next key, decode it for whichever screen
//! owns the keyboard, drive the engine, then run the persistence checkpoint
//! the engine's report asks for. All rule decisions stay in `kniffel-core`;
//! this module only routes.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kniffel_core::{GameState, MatchOutcome, TurnEngine, TurnEvent, TurnReport};
use kniffel_storage::{FileSaveStore, SaveGame, SaveStore};

use crate::cli::Cli;
use crate::input::{self, MenuKey, PlayKey};
use crate::state::Screen;
use crate::terminal::Tui;
use crate::ui::{self, MIN_HEIGHT, MIN_WIDTH, ViewContext};

/// Whether the loop keeps running after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct App {
    state: GameState,
    screen: Screen,
    store: Box<dyn SaveStore>,
    rng: StdRng,
    status: String,
    save_label: String,
}

impl App {
    /// Builds the app from CLI options: opens the save location, resumes
    /// the stored game when one parses, starts fresh otherwise.
    pub fn new(cli: &Cli) -> Result<Self> {
        let store =
            FileSaveStore::new(&cli.save_file).context("opening the save file location")?;
        let save_label = store.path().display().to_string();

        Ok(Self::with_store(
            Box::new(store),
            save_label,
            StdRng::from_entropy(),
            &cli.player_one,
            &cli.player_two,
        ))
    }

    /// Store-agnostic constructor; tests drive it with a memory store.
    fn with_store(
        store: Box<dyn SaveStore>,
        save_label: String,
        mut rng: StdRng,
        player_one: &str,
        player_two: &str,
    ) -> Self {
        let (state, status) = load_or_fresh(store.as_ref(), &mut rng, player_one, player_two);

        Self {
            state,
            screen: Screen::Play,
            store,
            rng,
            status,
            save_label,
        }
    }

    /// Drives draw/read/update until the player leaves.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            let size = terminal.size()?;
            let undersized = size.width < MIN_WIDTH || size.height < MIN_HEIGHT;

            ui::render(
                terminal,
                &ViewContext {
                    state: &self.state,
                    screen: &self.screen,
                    status: &self.status,
                    save_label: &self.save_label,
                    undersized,
                },
            )?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key, undersized)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, undersized: bool) -> Result<Flow> {
        tracing::debug!(code = ?key.code, "key pressed");

        // While the board does not fit, nothing is interactive except
        // leaving; quitting here skips the confirmation modal because it
        // could not be displayed either.
        if undersized {
            if matches!(input::decode_play(key), PlayKey::Quit) {
                return self.quit_and_save();
            }
            return Ok(Flow::Continue);
        }

        match self.screen {
            Screen::Play => self.handle_play(key),
            Screen::CategoryMenu { .. } => self.handle_menu(key),
            Screen::ConfirmQuit => self.handle_confirm(key),
            Screen::Finished => Ok(Flow::Exit),
        }
    }

    fn handle_play(&mut self, key: KeyEvent) -> Result<Flow> {
        match input::decode_play(key) {
            PlayKey::ToggleHold(die) => self.dispatch(TurnEvent::ToggleHold { die })?,
            PlayKey::Roll => self.dispatch(TurnEvent::Roll)?,
            PlayKey::EndTurn => self.dispatch(TurnEvent::EndTurn)?,
            PlayKey::Quit => self.screen = Screen::ConfirmQuit,
            PlayKey::None => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_menu(&mut self, key: KeyEvent) -> Result<Flow> {
        let command = input::decode_menu(key);

        // Cursor motion only touches the menu; selection goes through the
        // engine, which re-validates the position against the live state.
        let selected = match (&mut self.screen, command) {
            (Screen::CategoryMenu { cursor, .. }, MenuKey::Up) => {
                *cursor = cursor.saturating_sub(1);
                None
            }
            (Screen::CategoryMenu { options, cursor }, MenuKey::Down) => {
                if *cursor + 1 < options.len() {
                    *cursor += 1;
                }
                None
            }
            (Screen::CategoryMenu { cursor, .. }, MenuKey::Confirm) => Some(*cursor + 1),
            (Screen::CategoryMenu { .. }, MenuKey::Pick(position)) => Some(position),
            _ => None,
        };

        if let Some(position) = selected {
            self.dispatch(TurnEvent::Select { position })?;
        }
        Ok(Flow::Continue)
    }

    fn handle_confirm(&mut self, key: KeyEvent) -> Result<Flow> {
        if matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'y')) {
            return self.quit_and_save();
        }
        self.screen = Screen::Play;
        self.status.clear();
        Ok(Flow::Continue)
    }

    /// Runs one engine event and folds the report into screen and status.
    ///
    /// Rejections never change the screen: the status line explains them
    /// and the player simply tries again.
    fn dispatch(&mut self, event: TurnEvent) -> Result<()> {
        let report = match TurnEngine::new(&mut self.state).execute(event, &mut self.rng) {
            Ok(report) => report,
            Err(err) => {
                tracing::debug!(error = %err, "input rejected");
                self.status = err.to_string();
                return Ok(());
            }
        };

        match report {
            TurnReport::DiceRolled { rerolls_remaining } => {
                self.status = format!("Rolled. {} reroll(s) left.", rerolls_remaining);
            }
            TurnReport::HoldToggled { .. } => {
                self.status.clear();
            }
            TurnReport::SelectionOpened { options } => {
                self.screen = Screen::CategoryMenu { options, cursor: 0 };
                self.status = String::from("Pick a category.");
            }
            TurnReport::TurnFinalized { scored, outcome } => {
                self.screen = Screen::Play;
                self.status = match scored {
                    Some(option) => format!("Scored {} on {}.", option.score, option.category),
                    None => String::from("No open category; the turn passes."),
                };
                self.checkpoint(outcome)?;
            }
        }

        Ok(())
    }

    /// The persistence consequence of a finalized turn: a checkpoint while
    /// the match continues, deletion of the save once it is decided.
    fn checkpoint(&mut self, outcome: Option<MatchOutcome>) -> Result<()> {
        match outcome {
            None => {
                self.store
                    .save(&SaveGame::from_state(&self.state))
                    .context("writing the turn checkpoint")?;
            }
            Some(outcome) => {
                self.store
                    .delete()
                    .context("removing the finished game's save")?;
                tracing::info!(?outcome, "match finished");
                self.screen = Screen::Finished;
            }
        }
        Ok(())
    }

    fn quit_and_save(&mut self) -> Result<Flow> {
        if !self.state.is_game_over() {
            self.store
                .save(&SaveGame::from_state(&self.state))
                .context("saving the game on quit")?;
            tracing::info!("game saved on quit");
        }
        Ok(Flow::Exit)
    }
}

/// Restores the saved game if one loads cleanly. Any load problem is
/// logged and answered with a fresh game instead of a refusal to start.
fn load_or_fresh(
    store: &dyn SaveStore,
    rng: &mut StdRng,
    player_one: &str,
    player_two: &str,
) -> (GameState, String) {
    match store.load() {
        Ok(Some(record)) => match record.into_state() {
            Ok(state) => {
                tracing::info!("resumed saved game");
                let name = state.active_player().name().to_string();
                (state, format!("Welcome back. {} is up.", name))
            }
            Err(err) => {
                tracing::warn!(error = %err, "save file rejected, starting over");
                (
                    GameState::new(player_one, player_two, rng),
                    String::from("Save file was unusable; started a new game."),
                )
            }
        },
        Ok(None) => (
            GameState::new(player_one, player_two, rng),
            String::from("New game. Space rolls, 1-5 hold dice, Enter ends the turn."),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "save file unreadable, starting over");
            (
                GameState::new(player_one, player_two, rng),
                String::from("Save file was unreadable; started a new game."),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use kniffel_core::{Phase, REROLLS_PER_TURN};
    use kniffel_storage::MemorySaveStore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(key(code), false).unwrap()
    }

    fn app() -> App {
        App::with_store(
            Box::new(MemorySaveStore::new()),
            String::from("memory"),
            StdRng::seed_from_u64(77),
            "Ada",
            "Grace",
        )
    }

    #[test]
    fn a_fresh_app_starts_on_the_play_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Play);
        assert_eq!(app.state.active, 0);
        assert!(!app.store.exists());
    }

    #[test]
    fn a_whole_turn_runs_menu_and_checkpoint() {
        let mut app = app();

        assert_eq!(press(&mut app, KeyCode::Enter), Flow::Continue);
        assert!(matches!(app.screen, Screen::CategoryMenu { .. }));

        assert_eq!(press(&mut app, KeyCode::Enter), Flow::Continue);
        assert_eq!(app.screen, Screen::Play);
        assert_eq!(app.state.active, 1);
        assert_eq!(app.state.rerolls_remaining, REROLLS_PER_TURN);
        // The turn boundary wrote a checkpoint.
        assert!(app.store.exists());
    }

    #[test]
    fn rolling_with_an_empty_budget_is_rejected_in_place() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        let before = app.state.clone();

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state, before);
        assert_eq!(app.screen, Screen::Play);
        assert!(!app.status.is_empty());
    }

    #[test]
    fn holds_toggle_from_the_play_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state.active_player().dice.held_values().len(), 1);
        press(&mut app, KeyCode::Char('2'));
        assert!(app.state.active_player().dice.held_values().is_empty());
    }

    #[test]
    fn menu_cursor_clamps_at_both_ends() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert!(matches!(app.screen, Screen::CategoryMenu { cursor: 0, .. }));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('k'));
        assert!(matches!(app.screen, Screen::CategoryMenu { cursor: 0, .. }));
    }

    #[test]
    fn out_of_range_digit_leaves_the_menu_open() {
        let mut app = app();

        // Ten turns of scoring position 1 leave eight categories per player.
        for _ in 0..10 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('9'));
        assert!(matches!(app.screen, Screen::CategoryMenu { .. }));
        assert!(app.status.contains("out of range"));

        // An in-range digit still works afterwards.
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.screen, Screen::Play);
    }

    #[test]
    fn quit_asks_first_then_saves_and_exits() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Continue);
        assert_eq!(app.screen, Screen::ConfirmQuit);

        assert_eq!(press(&mut app, KeyCode::Char('y')), Flow::Exit);
        assert!(app.store.exists());
    }

    #[test]
    fn any_other_key_cancels_the_quit_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(press(&mut app, KeyCode::Char('n')), Flow::Continue);
        assert_eq!(app.screen, Screen::Play);
        assert!(!app.store.exists());
    }

    #[test]
    fn undersized_terminal_only_honors_quit() {
        let mut app = app();

        assert_eq!(app.handle_key(key(KeyCode::Char('1')), true).unwrap(), Flow::Continue);
        assert!(app.state.active_player().dice.held_values().is_empty());
        assert_eq!(app.handle_key(key(KeyCode::Enter), true).unwrap(), Flow::Continue);
        assert_eq!(app.state.phase, Phase::AwaitingRoll);

        assert_eq!(app.handle_key(key(KeyCode::Char('q')), true).unwrap(), Flow::Exit);
        assert!(app.store.exists());
    }

    #[test]
    fn finished_screen_exits_on_any_key() {
        let mut app = app();
        app.screen = Screen::Finished;
        assert_eq!(press(&mut app, KeyCode::Char('x')), Flow::Exit);
    }

    #[test]
    fn a_stored_game_is_resumed() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new("Ada", "Grace", &mut rng);
        TurnEngine::new(&mut state)
            .execute(TurnEvent::EndTurn, &mut rng)
            .unwrap();
        TurnEngine::new(&mut state)
            .execute(TurnEvent::Select { position: 1 }, &mut rng)
            .unwrap();

        let store = MemorySaveStore::with_save(SaveGame::from_state(&state));
        let app = App::with_store(
            Box::new(store),
            String::from("memory"),
            StdRng::seed_from_u64(6),
            "Ignored",
            "Names",
        );

        assert_eq!(app.state, state);
        assert_eq!(app.state.active, 1);
    }

    #[test]
    fn a_bad_record_falls_back_to_a_fresh_game() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = GameState::new("Ada", "Grace", &mut rng);
        let mut record = SaveGame::from_state(&state);
        record.players[0].dice_values = [9, 9, 9, 9, 9];

        let app = App::with_store(
            Box::new(MemorySaveStore::with_save(record)),
            String::from("memory"),
            StdRng::seed_from_u64(6),
            "Fresh",
            "Start",
        );

        assert_eq!(app.state.players[0].name(), "Fresh");
        assert!(app.status.contains("new game"));
    }
}
