//! Full-screen result view shown once every category is used.

use kniffel_core::{GameState, MatchOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let outcome = state.outcome();

    let headline = match outcome {
        Some(MatchOutcome::Win { winner }) => Line::from(Span::styled(
            format!("{} won!", state.players[winner].name()),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        _ => Line::from(Span::styled(
            "An even game!",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    };

    let mut lines = vec![Line::from(""), headline, Line::from(""), Line::from("")];

    for (index, player) in state.players.iter().enumerate() {
        let row = format!("{:<12}{:>4}", player.name(), player.total_score());
        let line = match outcome {
            Some(MatchOutcome::Win { winner }) if winner == index => {
                Line::from(Span::styled(row, theme::winner()))
            }
            _ => Line::from(Span::raw(row)),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to leave",
        theme::dim(),
    )));

    let screen = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent())
            .title(" Result "),
    );

    frame.render_widget(screen, area);
}
