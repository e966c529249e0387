//! Status line plus context-sensitive key help.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Screen;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, status: &str, screen: &Screen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(status.to_string())), rows[0]);
    frame.render_widget(Paragraph::new(help_line(screen)), rows[1]);
}

fn help_line(screen: &Screen) -> Line<'static> {
    match screen {
        Screen::Play => Line::from(vec![
            Span::styled("1-5", theme::key_hint()),
            Span::raw(" hold  "),
            Span::styled("Space", theme::key_hint()),
            Span::raw(" roll  "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(" end turn  "),
            Span::styled("q", theme::key_hint()),
            Span::raw(" quit"),
        ]),
        Screen::CategoryMenu { .. } => Line::from(vec![
            Span::styled("↑/↓", theme::key_hint()),
            Span::raw(" move  "),
            Span::styled("1-9", theme::key_hint()),
            Span::raw(" jump  "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(" score"),
        ]),
        Screen::ConfirmQuit => Line::from(vec![
            Span::styled("y", theme::key_hint()),
            Span::raw(" save and quit  "),
            Span::styled("any other key", theme::key_hint()),
            Span::raw(" resumes"),
        ]),
        Screen::Finished => Line::from(vec![
            Span::styled("any key", theme::key_hint()),
            Span::raw(" exits"),
        ]),
    }
}
