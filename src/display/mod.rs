//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledgers for the CLI and for the
//! column grid of the interactive list view.

pub mod ledger;

pub use ledger::{format_ledger_table, grid_columns, truncate_item};
