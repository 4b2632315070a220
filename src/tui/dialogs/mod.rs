//! Dialog modules for the TUI
//!
//! Contains modal dialogs for the shopping list commands

pub mod add_item;
pub mod help;
pub mod prompt;
