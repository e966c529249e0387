//! Category selection modal listing the open categories for the rolled dice.

use kniffel_core::ScoreOption;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, options: &[ScoreOption], cursor: usize) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = idx == cursor;
            let prefix = if is_selected { "► " } else { "  " };

            let row = format!(
                "{:>2}. {:<16}{:>4}",
                idx + 1,
                option.category.label(),
                option.score
            );
            let line = Line::from(vec![
                Span::styled(prefix, theme::key_hint()),
                Span::styled(
                    row,
                    if is_selected {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::accent())
            .title(" Score this roll as "),
    );

    frame.render_widget(list, area);
}
