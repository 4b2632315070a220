//! RecAppE - recipes in, shopping lists out
//!
//! This library provides the core of the RecAppE shopping list tool. Items
//! are kept in an [`IngredientLedger`](models::IngredientLedger) that sums
//! repeated items when their units agree and refuses to mix units. Recipes
//! and shopping lists are saved as JSON and can be merged into the list
//! being built.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Quantities, entries and the ingredient ledger
//! - `storage`: Structured and plain-text files for ledgers
//! - `config`: Data directory layout and user settings
//! - `session`: The live shopping list and the commands on it
//! - `display`: Text formatting shared by the CLI and TUI
//! - `cli`: Non-interactive subcommands
//! - `tui`: The interactive terminal interface
//! - `logging`: File-based tracing setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use recappe::config::{RecappePaths, Settings};
//! use recappe::session::Session;
//!
//! let paths = RecappePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = Session::new(paths, settings)?;
//! session.load_recipe("chili")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{RecappeError, RecappeResult};
