//! Render functions for the individual UI panes and modals.

pub mod category_menu;
pub mod dice_row;
pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod scoreboard;
pub mod size_guard;
pub mod win_screen;
