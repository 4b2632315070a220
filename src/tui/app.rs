//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The shopping list itself lives in the [`Session`]; everything here is
//! screen state.

use crate::session::Session;

use super::dialogs::add_item::AddItemState;
use super::dialogs::prompt::{PromptKind, PromptState};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Start screen: new list, load a list, or quit
    #[default]
    Welcome,
    /// The shopping list grid
    List,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    AddItem,
    Prompt(PromptKind),
}

/// Status bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App<'a> {
    /// The live shopping list and its files
    pub session: &'a mut Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown screen
    pub screen: Screen,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<StatusMessage>,

    /// Single-field prompt state (file names, item to remove)
    pub prompt: PromptState,

    /// Add item form state
    pub add_item: AddItemState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: &'a mut Session) -> Self {
        Self {
            session,
            should_quit: false,
            screen: Screen::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            prompt: PromptState::default(),
            add_item: AddItemState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: false,
        });
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: true,
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.clear_status();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::Prompt(kind) => self.prompt.reset(kind),
            ActiveDialog::AddItem => self.add_item.reset(),
            ActiveDialog::Help | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RecappePaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_dialog_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecappePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut session = Session::new(paths, Settings::default()).unwrap();
        let mut app = App::new(&mut session);

        assert_eq!(app.screen, Screen::Welcome);
        assert!(!app.has_dialog());

        app.open_dialog(ActiveDialog::Prompt(PromptKind::SaveList));
        assert!(app.has_dialog());
        assert_eq!(app.prompt.kind, PromptKind::SaveList);

        app.close_dialog();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_status_messages() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecappePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut session = Session::new(paths, Settings::default()).unwrap();
        let mut app = App::new(&mut session);

        app.set_error("Item not found");
        assert!(app.status_message.as_ref().unwrap().is_error);

        app.switch_screen(Screen::List);
        assert!(app.status_message.is_none());
    }
}
