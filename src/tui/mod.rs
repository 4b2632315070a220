//! Terminal User Interface module
//!
//! A ratatui front end over a [`Session`](crate::session::Session): a
//! welcome screen, the shopping list grid, and modal dialogs for each
//! list command.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Commands
pub mod commands;

pub use app::App;
pub use terminal::run_tui;
