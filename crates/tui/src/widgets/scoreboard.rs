//! Side-by-side scorecards for both players.

use kniffel_core::{Category, GameState, Player, SCORING_TABLE, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (index, player) in state.players.iter().enumerate() {
        render_card(frame, panes[index], player, index == state.active);
    }
}

fn render_card(frame: &mut Frame, area: Rect, player: &Player, is_active: bool) {
    let mut lines = Vec::with_capacity(16);

    for (rule, cell) in SCORING_TABLE.iter().zip(player.scorecard()) {
        lines.push(score_row(rule.category, cell));
        // The bonus progress row sits between the upper and lower halves.
        if rule.category == Category::Sixes {
            lines.push(upper_summary(player));
        }
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    lines.push(Line::from(vec![
        Span::styled(format!("{:<16}", "Total"), bold),
        Span::styled(format!("{:>4}", player.total_score()), bold),
    ]));

    let (name_style, border_style) = if is_active {
        (theme::active_player(), theme::accent())
    } else {
        (Style::default(), Style::default())
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", player.name()), name_style)),
    );

    frame.render_widget(card, area);
}

fn score_row(category: Category, cell: Option<u16>) -> Line<'static> {
    match cell {
        Some(points) => Line::from(vec![
            Span::raw(format!("{:<16}", category.label())),
            Span::raw(format!("{:>4}", points)),
        ]),
        None => Line::from(vec![
            Span::styled(format!("{:<16}", category.label()), theme::dim()),
            Span::styled(format!("{:>4}", "-"), theme::dim()),
        ]),
    }
}

fn upper_summary(player: &Player) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:<14}", "Upper bonus"), theme::dim()),
        Span::raw(format!(
            "{:>3}/{}",
            player.upper_total(),
            UPPER_BONUS_THRESHOLD
        )),
    ];
    if player.has_upper_bonus() {
        spans.push(Span::styled(format!("  +{}", UPPER_BONUS), theme::winner()));
    }
    Line::from(spans)
}
