//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Screen};
use super::commands::{find_command, CommandAction};
use super::dialogs;
use super::dialogs::prompt::PromptKind;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // The next draw picks up the new size
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits, even from inside a dialog
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.screen {
        Screen::Welcome => handle_welcome_key(app, key),
        Screen::List => handle_list_key(app, key),
    }
}

/// Handle keys on the welcome screen
fn handle_welcome_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.switch_screen(Screen::List),
        KeyCode::Char('l') => app.open_dialog(ActiveDialog::Prompt(PromptKind::LoadList)),
        KeyCode::Char('q') => app.quit(),
        _ => app.set_error("Command not found, try again"),
    }
    Ok(())
}

/// Handle keys on the shopping list screen
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let action = match key.code {
        KeyCode::Char(c) => find_command(c),
        _ => None,
    };

    match action {
        Some(action) => execute_action(app, action),
        None => app.set_error("Command not found"),
    }
    Ok(())
}

/// Run a list screen command
pub fn execute_action(app: &mut App, action: CommandAction) {
    match action {
        CommandAction::AddItem => app.open_dialog(ActiveDialog::AddItem),
        CommandAction::RemoveItem => {
            app.open_dialog(ActiveDialog::Prompt(PromptKind::RemoveItem))
        }
        CommandAction::LoadRecipe => {
            app.open_dialog(ActiveDialog::Prompt(PromptKind::LoadRecipe))
        }
        CommandAction::SaveRecipe => {
            app.open_dialog(ActiveDialog::Prompt(PromptKind::SaveRecipe))
        }
        CommandAction::SaveList => app.open_dialog(ActiveDialog::Prompt(PromptKind::SaveList)),
        CommandAction::ClearList => {
            app.session.clear();
            app.set_status("List cleared");
        }
        CommandAction::Help => app.open_dialog(ActiveDialog::Help),
        CommandAction::Quit => app.quit(),
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => handle_help_key(app, key),
        ActiveDialog::AddItem => {
            dialogs::add_item::handle_key(app, key);
        }
        ActiveDialog::Prompt(_) => {
            dialogs::prompt::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Help closes on its own keys; any other command key closes it and runs
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') => app.close_dialog(),
        KeyCode::Char(c) => {
            app.close_dialog();
            match find_command(c) {
                Some(action) => execute_action(app, action),
                None => app.set_error("Command not found"),
            }
        }
        _ => app.close_dialog(),
    }
}
