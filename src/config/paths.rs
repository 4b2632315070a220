//! Path management for Recappe
//!
//! Provides XDG-compliant path resolution for recipes, shopping lists and
//! settings.
//!
//! ## Path Resolution Order
//!
//! 1. `RECAPPE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/recappe` or `~/.local/share/recappe`
//! 3. Windows: `%APPDATA%\recappe`
//!
//! ## Layout
//!
//! ```text
//! <base>/
//!   config.json
//!   recappe.log
//!   saved_recipes/<name>          structured
//!   shopping_lists/<name>         human-readable
//!   shopping_lists/data/<name>    structured
//! ```

use std::path::{Path, PathBuf};

use crate::error::RecappeError;

/// Manages all paths used by Recappe
#[derive(Debug, Clone)]
pub struct RecappePaths {
    /// Base directory for all Recappe data
    base_dir: PathBuf,
}

impl RecappePaths {
    /// Create a new RecappePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RecappeError> {
        let base_dir = if let Ok(custom) = std::env::var("RECAPPE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RecappePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory of importable recipes
    pub fn recipes_dir(&self) -> PathBuf {
        self.base_dir.join("saved_recipes")
    }

    /// Directory of human-readable shopping lists
    pub fn lists_dir(&self) -> PathBuf {
        self.base_dir.join("shopping_lists")
    }

    /// Directory of structured shopping list data
    pub fn list_data_dir(&self) -> PathBuf {
        self.lists_dir().join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("recappe.log")
    }

    /// Path of a saved recipe
    pub fn recipe_file(&self, name: &str) -> PathBuf {
        self.recipes_dir().join(name)
    }

    /// Path of a human-readable shopping list
    pub fn list_text_file(&self, name: &str) -> PathBuf {
        self.lists_dir().join(name)
    }

    /// Path of a structured shopping list
    pub fn list_data_file(&self, name: &str) -> PathBuf {
        self.list_data_dir().join(name)
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), RecappeError> {
        for dir in [
            self.base_dir.clone(),
            self.recipes_dir(),
            self.lists_dir(),
            self.list_data_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                RecappeError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        Ok(())
    }

    /// Names of saved recipes, sorted
    pub fn saved_recipe_names(&self) -> Result<Vec<String>, RecappeError> {
        file_names(&self.recipes_dir())
    }

    /// Names of saved shopping lists (those with structured data), sorted
    pub fn saved_list_names(&self) -> Result<Vec<String>, RecappeError> {
        file_names(&self.list_data_dir())
    }
}

/// Regular files in a directory, ignoring temp files; empty if the directory is missing
fn file_names(dir: &Path) -> Result<Vec<String>, RecappeError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| RecappeError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".tmp") {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RecappeError> {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(data_home).join("recappe"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| RecappeError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("recappe"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RecappeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RecappeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("recappe"))
}
