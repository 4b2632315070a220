//! Single-field prompt dialog
//!
//! Asks for a recipe or list name, or for the item to remove. On failure
//! the dialog stays open with the error so the user can fix the input and
//! press Enter again.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::RecappeError;
use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// What the prompt is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    #[default]
    LoadRecipe,
    LoadList,
    SaveRecipe,
    SaveList,
    RemoveItem,
}

impl PromptKind {
    /// Dialog title
    pub fn title(self) -> &'static str {
        match self {
            Self::LoadRecipe => " Load Recipe ",
            Self::LoadList => " Load Shopping List ",
            Self::SaveRecipe => " Save as Recipe ",
            Self::SaveList => " Save Shopping List ",
            Self::RemoveItem => " Remove Item ",
        }
    }

    /// Question shown above the input
    pub fn question(self) -> &'static str {
        match self {
            Self::LoadRecipe => "Enter name of recipe to load:",
            Self::LoadList => "Enter name of shopping list to load:",
            Self::SaveRecipe => "Enter name to save recipe as:",
            Self::SaveList => "Enter name to save list as:",
            Self::RemoveItem => "Enter item to remove:",
        }
    }
}

/// State for the prompt dialog
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl PromptState {
    /// Start a fresh prompt
    pub fn reset(&mut self, kind: PromptKind) {
        self.kind = kind;
        self.input = TextInput::new().focused(true);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the prompt dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(64, 10, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(app.prompt.kind.title())
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
            Constraint::Length(1), // Question
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Saved names
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let question = Line::from(Span::styled(
        app.prompt.kind.question(),
        Style::default().fg(Color::White),
    ));
    frame.render_widget(Paragraph::new(question), chunks[0]);

    frame.render_widget(&app.prompt.input, chunks[1]);

    if let Some(line) = saved_names_line(app) {
        frame.render_widget(Paragraph::new(line), chunks[3]);
    }

    if let Some(ref error) = app.prompt.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Confirm  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

/// Existing names the user can pick from, for load prompts
fn saved_names_line(app: &App) -> Option<Line<'static>> {
    let (label, names) = match app.prompt.kind {
        PromptKind::LoadRecipe => ("Saved recipes: ", app.session.saved_recipes().ok()?),
        PromptKind::LoadList => ("Saved lists: ", app.session.saved_lists().ok()?),
        _ => return None,
    };

    let listing = if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    };

    Some(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(listing, Style::default().fg(Color::Yellow)),
    ]))
}

/// Handle key events for the prompt dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            submit(app);
            true
        }
        _ => {
            app.prompt.error_message = None;
            app.prompt.input.handle_key(key)
        }
    }
}

/// Run the prompted operation against the session
fn submit(app: &mut App) {
    let value = app.prompt.input.value().to_string();

    match app.prompt.kind {
        PromptKind::LoadRecipe => match app.session.load_recipe(&value) {
            Ok(_) => {
                app.close_dialog();
                app.set_status(format!("{} fully loaded", value));
            }
            Err(e) => load_failed(app, &value, e),
        },
        PromptKind::LoadList => match app.session.load_list(&value) {
            Ok(_) => {
                app.close_dialog();
                app.switch_screen(Screen::List);
                app.set_status(format!("{} fully loaded", value));
            }
            Err(e) => load_failed(app, &value, e),
        },
        PromptKind::SaveRecipe => match app.session.save_as_recipe(&value) {
            Ok(()) => {
                app.close_dialog();
                app.set_status(format!("Saved recipe {}", value));
            }
            Err(_) => app.prompt.set_error("File unable to be saved"),
        },
        PromptKind::SaveList => match app.session.save_list(&value) {
            Ok(()) => {
                app.close_dialog();
                app.set_status(format!("Saved shopping list {}", value));
            }
            Err(_) => app.prompt.set_error("File unable to be saved"),
        },
        PromptKind::RemoveItem => match app.session.remove(&value) {
            Ok(entry) => {
                app.close_dialog();
                app.set_status(format!("Removed {} {}", entry, value));
            }
            Err(e) if e.is_not_found() => app.prompt.set_error("Item not found"),
            Err(e) => app.prompt.set_error(e.to_string()),
        },
    }
}

fn load_failed(app: &mut App, name: &str, err: RecappeError) {
    if err.is_unit_mismatch() {
        // Part of the file is already merged, so retrying would merge it twice
        app.close_dialog();
        if app.screen == Screen::Welcome {
            app.switch_screen(Screen::List);
        }
        app.set_error(format!("Stopped loading {}: {}", name, err));
    } else if err.is_file_not_found() {
        app.prompt.set_error("File not found");
    } else {
        app.prompt.set_error(err.to_string());
    }
}
