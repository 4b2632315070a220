//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session layer.

pub mod list;
pub mod recipe;

pub use list::{handle_list_command, ListCommands};
pub use recipe::{handle_recipe_command, RecipeCommands};
