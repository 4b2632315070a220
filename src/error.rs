//! Custom error types for Recappe
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Recappe operations
#[derive(Error, Debug)]
pub enum RecappeError {
    /// The named item is not in the ledger
    #[error("Item not found: {name}")]
    NotFound { name: String },

    /// An add tried to combine two different units for the same item
    #[error("Cannot add {attempted} {name}: already listed in {existing}")]
    UnitMismatch {
        name: String,
        existing: String,
        attempted: String,
    },

    /// The file to read does not exist (or is a directory)
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Structured file content is not a name -> [quantity, unit] mapping
    #[error("Malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// A quantity could not be interpreted as a number
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl RecappeError {
    /// Create a "not found" error for an item name
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a "malformed data" error for a file
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a unit mismatch
    pub fn is_unit_mismatch(&self) -> bool {
        matches!(self, Self::UnitMismatch { .. })
    }

    /// Check if this is a missing file
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

impl From<std::io::Error> for RecappeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Recappe operations
pub type RecappeResult<T> = Result<T, RecappeError>;
