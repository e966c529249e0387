//! Dice row widget: five bordered cells plus a held-faces readout.

use kniffel_core::{DICE_COUNT, GameState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

// Indexed by face value minus one.
const FACE_GLYPHS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); DICE_COUNT])
        .split(rows[0]);

    let dice = &state.active_player().dice;

    for (position, die) in dice.iter().enumerate() {
        let (cell_style, border_style) = if die.is_held() {
            (theme::held(), theme::held())
        } else {
            (Style::default(), Style::default())
        };

        let glyph = FACE_GLYPHS[usize::from(die.value()) - 1];
        let cell = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", glyph, die.value()),
            cell_style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", position + 1)),
        );

        frame.render_widget(cell, cells[position]);
    }

    let held = dice.held_values();
    let readout = if held.is_empty() {
        Line::from(Span::styled("Held: none", theme::dim()))
    } else {
        let faces = held
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Line::from(vec![
            Span::styled("Held: ", theme::dim()),
            Span::styled(faces, theme::held()),
        ])
    };

    let readout = Paragraph::new(readout).alignment(Alignment::Center);
    frame.render_widget(readout, rows[1]);
}
