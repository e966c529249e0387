//! Quit confirmation modal.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, save_label: &str) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from("Save the game and exit?"),
        Line::from(Span::styled(
            format!("Progress is written to {}", save_label),
            theme::dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", theme::key_hint()),
            Span::raw(" save and quit   "),
            Span::styled("any other key", theme::key_hint()),
            Span::raw(" resumes"),
        ]),
    ];

    let modal = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::warning())
            .title(" Quit "),
    );

    frame.render_widget(modal, area);
}
