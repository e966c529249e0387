//! Interaction modes of the terminal client.

use kniffel_core::ScoreOption;

/// Which surface currently owns the keyboard.
///
/// The engine decides when a mode change is legal; `Screen` only mirrors
/// the last report so rendering and key routing stay in step with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Dice board: holding, rolling, ending the turn.
    Play,
    /// Category menu over the board. `options` is the snapshot the engine
    /// reported when the menu opened; `cursor` is 0-based within it.
    CategoryMenu {
        options: Vec<ScoreOption>,
        cursor: usize,
    },
    /// Quit confirmation modal over the board.
    ConfirmQuit,
    /// Terminal result view; the next key press exits.
    Finished,
}
