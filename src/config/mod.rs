//! Configuration module for Recappe
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution for recipes and shopping lists
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RecappePaths;
pub use settings::Settings;
