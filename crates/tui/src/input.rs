//! Keyboard decoding for the terminal client.
//!
//! Raw `crossterm` key events are translated here into small per-screen
//! command enums; the app loop then routes commands rather than matching
//! on key codes, and the concrete bindings live in one place.

use crossterm::event::{KeyCode, KeyEvent};

/// Command decoded while the dice board has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKey {
    /// Toggle the hold flag on the die at this 1-based position.
    ToggleHold(usize),
    /// Reroll every unheld die.
    Roll,
    /// Stop rerolling and open category selection.
    EndTurn,
    /// Ask for confirmation before leaving.
    Quit,
    /// No binding for this key.
    None,
}

/// Command decoded while the category menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    /// Jump straight to this 1-based menu position.
    Pick(usize),
    /// Score the entry under the cursor.
    Confirm,
    /// No binding for this key.
    None,
}

/// Converts a raw key event into a dice-board command.
pub fn decode_play(key: KeyEvent) -> PlayKey {
    match key.code {
        KeyCode::Enter => PlayKey::EndTurn,
        KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
            'q' => PlayKey::Quit,
            ' ' => PlayKey::Roll,
            ch @ '1'..='5' => PlayKey::ToggleHold(position(ch)),
            _ => PlayKey::None,
        },
        _ => PlayKey::None,
    }
}

/// Converts a raw key event into a category-menu command.
pub fn decode_menu(key: KeyEvent) -> MenuKey {
    match key.code {
        KeyCode::Up => MenuKey::Up,
        KeyCode::Down => MenuKey::Down,
        KeyCode::Enter => MenuKey::Confirm,
        KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
            'k' => MenuKey::Up,
            'j' => MenuKey::Down,
            ch @ '1'..='9' => MenuKey::Pick(position(ch)),
            _ => MenuKey::None,
        },
        _ => MenuKey::None,
    }
}

fn position(digit: char) -> usize {
    digit as usize - '0' as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn play_maps_digits_to_die_positions() {
        assert_eq!(decode_play(key(KeyCode::Char('1'))), PlayKey::ToggleHold(1));
        assert_eq!(decode_play(key(KeyCode::Char('5'))), PlayKey::ToggleHold(5));
        assert_eq!(decode_play(key(KeyCode::Char('0'))), PlayKey::None);
        assert_eq!(decode_play(key(KeyCode::Char('6'))), PlayKey::None);
    }

    #[test]
    fn play_maps_roll_end_turn_and_quit() {
        assert_eq!(decode_play(key(KeyCode::Char(' '))), PlayKey::Roll);
        assert_eq!(decode_play(key(KeyCode::Enter)), PlayKey::EndTurn);
        assert_eq!(decode_play(key(KeyCode::Char('q'))), PlayKey::Quit);
        assert_eq!(decode_play(key(KeyCode::Char('Q'))), PlayKey::Quit);
    }

    #[test]
    fn play_ignores_unknown_keys() {
        assert_eq!(decode_play(key(KeyCode::Char('x'))), PlayKey::None);
        assert_eq!(decode_play(key(KeyCode::Esc)), PlayKey::None);
        assert_eq!(decode_play(key(KeyCode::Left)), PlayKey::None);
    }

    #[test]
    fn menu_moves_the_cursor_with_arrows_and_vi_keys() {
        assert_eq!(decode_menu(key(KeyCode::Up)), MenuKey::Up);
        assert_eq!(decode_menu(key(KeyCode::Char('k'))), MenuKey::Up);
        assert_eq!(decode_menu(key(KeyCode::Down)), MenuKey::Down);
        assert_eq!(decode_menu(key(KeyCode::Char('j'))), MenuKey::Down);
    }

    #[test]
    fn menu_maps_digits_and_confirm() {
        assert_eq!(decode_menu(key(KeyCode::Char('1'))), MenuKey::Pick(1));
        assert_eq!(decode_menu(key(KeyCode::Char('9'))), MenuKey::Pick(9));
        assert_eq!(decode_menu(key(KeyCode::Char('0'))), MenuKey::None);
        assert_eq!(decode_menu(key(KeyCode::Enter)), MenuKey::Confirm);
    }
}
