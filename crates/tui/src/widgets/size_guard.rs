//! Blocking notice shown while the terminal is too small to play on.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Invalid terminal size",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Please enlarge the terminal"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Need at least {}x{}", min_width, min_height),
            theme::dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("q", theme::key_hint()),
            Span::raw(" quits"),
        ]),
    ];

    let notice = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme::warning()));

    frame.render_widget(notice, area);
}
