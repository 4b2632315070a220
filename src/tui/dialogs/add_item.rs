//! Add item dialog
//!
//! Three fields: the item, how many, and the unit (or qualifier such as
//! "whole" or "diced"). Enter moves to the next field and submits from
//! the last one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the add item dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddItemField {
    #[default]
    Item,
    Quantity,
    Unit,
}

impl AddItemField {
    pub fn next(self) -> Self {
        match self {
            Self::Item => Self::Quantity,
            Self::Quantity => Self::Unit,
            Self::Unit => Self::Item,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Item => Self::Unit,
            Self::Quantity => Self::Item,
            Self::Unit => Self::Quantity,
        }
    }
}

/// State for the add item dialog
#[derive(Debug, Clone)]
pub struct AddItemState {
    pub focused_field: AddItemField,
    pub item: TextInput,
    pub quantity: TextInput,
    pub unit: TextInput,
    pub error_message: Option<String>,
}

impl Default for AddItemState {
    fn default() -> Self {
        Self {
            focused_field: AddItemField::default(),
            item: TextInput::new()
                .label("Item")
                .placeholder("onions")
                .focused(true),
            quantity: TextInput::new().label("Quantity").placeholder("3"),
            unit: TextInput::new().label("Unit").placeholder("whole"),
            error_message: None,
        }
    }
}

impl AddItemState {
    /// Reset the state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.focus(self.focused_field.next());
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.focus(self.focused_field.prev());
    }

    fn focus(&mut self, field: AddItemField) {
        self.focused_field = field;
        self.item.focused = field == AddItemField::Item;
        self.quantity.focused = field == AddItemField::Quantity;
        self.unit.focused = field == AddItemField::Unit;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            AddItemField::Item => &mut self.item,
            AddItemField::Quantity => &mut self.quantity,
            AddItemField::Unit => &mut self.unit,
        }
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add item dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(52, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Item ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Item
            Constraint::Length(1), // Quantity
            Constraint::Length(1), // Unit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let state = &app.add_item;
    frame.render_widget(&state.item, chunks[0]);
    frame.render_widget(&state.quantity, chunks[1]);
    frame.render_widget(&state.unit, chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

/// Handle key events for the add item dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.add_item.reset();
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.add_item.prev_field();
            } else {
                app.add_item.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            app.add_item.prev_field();
            true
        }

        KeyCode::Enter => {
            if app.add_item.focused_field == AddItemField::Unit {
                submit(app);
            } else {
                app.add_item.next_field();
            }
            true
        }

        _ => {
            app.add_item.error_message = None;
            app.add_item.focused_input().handle_key(key)
        }
    }
}

/// Add the item to the session, keeping the dialog open on failure
fn submit(app: &mut App) {
    let name = app.add_item.item.value().trim().to_string();
    if name.is_empty() {
        app.add_item.set_error("Enter an item name");
        app.add_item.focus(AddItemField::Item);
        return;
    }

    let quantity = app.add_item.quantity.value().to_string();
    let unit = app.add_item.unit.value().trim().to_string();
    if unit.is_empty() {
        app.add_item.set_error("Enter a unit");
        app.add_item.focus(AddItemField::Unit);
        return;
    }

    match app.session.add_raw(&name, &quantity, &unit) {
        Ok(()) => {
            let added = app
                .session
                .ledger()
                .describe(&name)
                .unwrap_or_else(|_| name.clone());
            app.add_item.reset();
            app.close_dialog();
            app.set_status(format!("Added {}", added));
        }
        Err(e) => {
            app.add_item.set_error(format!("Could not add item: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RecappePaths, Settings};
    use crate::models::Entry;
    use crate::session::Session;
    use crate::tui::app::ActiveDialog;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn new_session(temp_dir: &TempDir) -> Session {
        let paths = RecappePaths::with_base_dir(temp_dir.path().to_path_buf());
        Session::new(paths, Settings::default()).unwrap()
    }

    fn fill(app: &mut App, item: &str, quantity: &str, unit: &str) {
        type_text(app, item);
        handle_key(app, key(KeyCode::Enter));
        type_text(app, quantity);
        handle_key(app, key(KeyCode::Enter));
        type_text(app, unit);
        handle_key(app, key(KeyCode::Enter));
    }

    #[test]
    fn test_field_cycling() {
        let mut state = AddItemState::default();
        assert!(state.item.focused);

        state.next_field();
        assert_eq!(state.focused_field, AddItemField::Quantity);
        assert!(state.quantity.focused);
        assert!(!state.item.focused);

        state.prev_field();
        state.prev_field();
        assert_eq!(state.focused_field, AddItemField::Unit);
    }

    #[test]
    fn test_add_item_success() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = new_session(&temp_dir);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddItem);

        fill(&mut app, "onions", "3", "whole");

        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_ref().map(|s| s.text.as_str()),
            Some("Added 3 whole onions")
        );
        assert_eq!(
            app.session.ledger().quantity_of("onions").unwrap(),
            &Entry::new(3, "whole")
        );
    }

    #[test]
    fn test_unit_mismatch_keeps_dialog_open() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = new_session(&temp_dir);
        session.add_raw("onions", "3", "whole").unwrap();
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddItem);

        fill(&mut app, "onions", "1", "diced");

        assert_eq!(app.active_dialog, ActiveDialog::AddItem);
        let error = app.add_item.error_message.clone().unwrap();
        assert!(error.starts_with("Could not add item"));
        assert_eq!(
            app.session.ledger().quantity_of("onions").unwrap(),
            &Entry::new(3, "whole")
        );
    }

    #[test]
    fn test_bad_quantity_and_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = new_session(&temp_dir);
        let mut app = App::new(&mut session);
        app.open_dialog(ActiveDialog::AddItem);

        fill(&mut app, "", "3", "whole");
        assert_eq!(
            app.add_item.error_message.as_deref(),
            Some("Enter an item name")
        );
        assert_eq!(app.add_item.focused_field, AddItemField::Item);

        app.open_dialog(ActiveDialog::AddItem);
        fill(&mut app, "onions", "3", "  ");
        assert_eq!(app.add_item.error_message.as_deref(), Some("Enter a unit"));
        assert_eq!(app.add_item.focused_field, AddItemField::Unit);
        assert!(app.session.ledger().is_empty());

        app.open_dialog(ActiveDialog::AddItem);
        fill(&mut app, "garlic", "lots", "cloves");
        assert!(app.has_dialog());
        assert!(app.session.ledger().is_empty());
    }
}
