//! Logging setup
//!
//! The TUI owns the terminal, so log records go to a file in the data
//! directory instead of stderr. `RECAPPE_LOG` overrides the filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::RecappeError;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "RECAPPE_LOG";

/// Build the filter, preferring the environment over the defaults
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("recappe=debug")
        } else {
            EnvFilter::new("recappe=info")
        }
    })
}

/// Send log records to `log_file`, appending to it
pub fn init_file_logger(log_file: &Path, verbose: bool) -> Result<(), RecappeError> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            RecappeError::Io(format!("Failed to open {}: {}", log_file.display(), e))
        })?;

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| RecappeError::Config(format!("Failed to initialize logging: {}", e)))
}
