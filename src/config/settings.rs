//! User settings for Recappe
//!
//! Display preferences and how shopping lists are written.

use serde::{Deserialize, Serialize};

use super::paths::RecappePaths;
use crate::error::RecappeError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Recappe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Show the shopping list sorted by item name instead of insertion order
    #[serde(default = "default_sort_display")]
    pub sort_display: bool,

    /// Width of one column in the list grid; longer items are truncated
    #[serde(default = "default_column_width")]
    pub column_width: u16,

    /// Append to an existing plain-text list instead of rewriting it
    #[serde(default)]
    pub append_text_lists: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_sort_display() -> bool {
    true
}

fn default_column_width() -> u16 {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            sort_display: default_sort_display(),
            column_width: default_column_width(),
            append_text_lists: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &RecappePaths) -> Result<Self, RecappeError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| {
            RecappeError::Config(format!("Failed to load settings: {}", e))
        })?;

        // Columns narrower than the ".." suffix plus one character are unusable
        if settings.column_width < 4 {
            return Err(RecappeError::Config(format!(
                "column_width must be at least 4, got {}",
                settings.column_width
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RecappePaths) -> Result<(), RecappeError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
