//! Frame composition for the terminal client.
//!
//! The main render entry point routes between the full-screen views and
//! the board with its modal overlays.

use anyhow::Result;
use kniffel_core::GameState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::state::Screen;
use crate::terminal::Tui;
use crate::widgets;

/// Smallest terminal the full board fits into.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 26;

/// Everything a frame needs, borrowed from the app for one draw call.
pub struct ViewContext<'a> {
    pub state: &'a GameState,
    pub screen: &'a Screen,
    pub status: &'a str,
    pub save_label: &'a str,
    pub undersized: bool,
}

/// Render one frame.
///
/// The size guard replaces everything when the terminal is too small;
/// the result view replaces the board; modals draw on top of the board.
pub fn render(terminal: &mut Tui, ctx: &ViewContext) -> Result<()> {
    terminal.draw(|frame| {
        if ctx.undersized {
            widgets::size_guard::render(frame, frame.area(), MIN_WIDTH, MIN_HEIGHT);
            return;
        }

        match ctx.screen {
            Screen::Finished => widgets::win_screen::render(frame, frame.area(), ctx.state),
            screen => {
                render_board(frame, ctx);

                match screen {
                    Screen::CategoryMenu { options, cursor } => {
                        let area = centered_rect(46, 70, frame.area());
                        widgets::category_menu::render(frame, area, options, *cursor);
                    }
                    Screen::ConfirmQuit => {
                        let area = centered_rect(56, 35, frame.area());
                        widgets::quit_confirm::render(frame, area, ctx.save_label);
                    }
                    _ => {}
                }
            }
        }
    })?;

    Ok(())
}

/// Render the standard board: header, dice, scorecards, status footer.
fn render_board(frame: &mut ratatui::Frame, ctx: &ViewContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Dice
            Constraint::Min(0),    // Scorecards
            Constraint::Length(2), // Status + key help
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.state);
    widgets::dice_row::render(frame, chunks[1], ctx.state);
    widgets::scoreboard::render(frame, chunks[2], ctx.state);
    widgets::footer::render(frame, chunks[3], ctx.status, ctx.screen);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
