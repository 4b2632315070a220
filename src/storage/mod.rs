//! Storage layer for Recappe
//!
//! JSON file storage with atomic writes for ledgers that get loaded again,
//! plus the plain-text listing written alongside shopping lists.

pub mod file_io;
pub mod ledger_store;

pub use file_io::{read_json, read_json_required, write_json_atomic, write_lines};
pub use ledger_store::LedgerStore;
