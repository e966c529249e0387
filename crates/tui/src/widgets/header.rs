//! Header widget naming the active player and the rerolls left this turn.

use kniffel_core::{GameState, REROLLS_PER_TURN};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let text = vec![Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(state.active_player().name().to_string(), theme::active_player()),
        Span::raw("   Rerolls: "),
        Span::styled(
            format!("{}/{}", state.rerolls_remaining, REROLLS_PER_TURN),
            theme::key_hint(),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Kniffel "));

    frame.render_widget(paragraph, area);
}
