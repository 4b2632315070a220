//! Core data models for Recappe
//!
//! An [`IngredientLedger`] maps item names to an [`Entry`] (a [`Quantity`] and
//! a unit). Recipes and shopping lists are both ledgers.

pub mod entry;
pub mod ledger;
pub mod quantity;

pub use entry::Entry;
pub use ledger::{IngredientLedger, Iter};
pub use quantity::Quantity;
