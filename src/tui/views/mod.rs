//! TUI Views module
//!
//! The welcome screen, the shopping list grid, and the status bar.

pub mod list;
pub mod status_bar;
pub mod welcome;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    match app.screen {
        Screen::Welcome => welcome::render(frame, app, layout.main),
        Screen::List => list::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddItem => dialogs::add_item::render(frame, app),
        ActiveDialog::Prompt(_) => dialogs::prompt::render(frame, app),
        ActiveDialog::None => {}
    }
}
