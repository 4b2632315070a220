//! Ledger persistence
//!
//! Two independent formats:
//! - structured: a JSON object mapping item name to `[quantity, unit]`,
//!   used for anything that gets loaded again (recipes, list data)
//! - human-readable: one `"<quantity> <unit> <name>"` line per item, written
//!   for printing and never parsed back

use std::path::Path;

use crate::error::RecappeResult;
use crate::models::IngredientLedger;

use super::file_io::{read_json_required, write_json_atomic, write_lines};

/// Reads and writes ledgers on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerStore;

impl LedgerStore {
    /// Load a ledger from a structured file
    ///
    /// Each entry in the file is added once, in file order.
    pub fn load_structured(path: impl AsRef<Path>) -> RecappeResult<IngredientLedger> {
        read_json_required(path)
    }

    /// Write the full ledger as a structured file, replacing any old content
    pub fn save_structured(ledger: &IngredientLedger, path: impl AsRef<Path>) -> RecappeResult<()> {
        write_json_atomic(path, ledger)
    }

    /// Write one display line per item
    ///
    /// With `append` the lines are added after the existing file content,
    /// otherwise the file is rewritten.
    pub fn save_human_readable(
        ledger: &IngredientLedger,
        path: impl AsRef<Path>,
        append: bool,
    ) -> RecappeResult<()> {
        let lines = ledger
            .names()
            .map(|name| ledger.describe(name))
            .collect::<RecappeResult<Vec<_>>>()?;

        write_lines(path, lines, append)
    }
}
