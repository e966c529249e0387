//! Shared styling for the terminal UI.
//!
//! Kept as plain functions so widgets agree on colors without threading a
//! theme value through every render call.

use ratatui::style::{Color, Modifier, Style};

/// Accent for borders and titles of the focused pane.
pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Secondary information next to primary content.
pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Held dice and their readout.
pub fn held() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// The player whose turn it is.
pub fn active_player() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Rejected inputs and recoverable problems in the status line.
pub fn warning() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Winner emphasis on the result screen.
pub fn winner() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Key labels inside help lines.
pub fn key_hint() -> Style {
    Style::default().fg(Color::Yellow)
}
