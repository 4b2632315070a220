//! Ingredient ledger
//!
//! The aggregate behind both recipes and shopping lists: a mapping from item
//! name to an [`Entry`]. Adding an item that is already present sums the
//! quantities when the units match and is rejected when they differ.
//!
//! Iteration follows insertion order. Sorting for display is left to callers.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::entry::Entry;
use super::quantity::Quantity;
use crate::error::{RecappeError, RecappeResult};

/// Quantity-aggregated list of named items
#[derive(Debug, Clone, Default)]
pub struct IngredientLedger {
    /// Item names in insertion order
    order: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl IngredientLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount of an item
    ///
    /// A new name is inserted as-is. An existing name with the same unit has
    /// its quantity increased. An existing name with a different unit fails
    /// with [`RecappeError::UnitMismatch`] and the ledger is left untouched.
    /// Non-finite amounts, including sums that overflow, fail with
    /// [`RecappeError::InvalidQuantity`], also leaving the ledger untouched.
    pub fn add(
        &mut self,
        name: &str,
        quantity: impl Into<Quantity>,
        unit: &str,
    ) -> RecappeResult<()> {
        let quantity = quantity.into();
        if !quantity.is_finite() {
            return Err(RecappeError::InvalidQuantity(format!(
                "{} {} is not a finite amount",
                quantity, name
            )));
        }

        if let Some(entry) = self.entries.get_mut(name) {
            if !entry.is_compatible(unit) {
                return Err(RecappeError::UnitMismatch {
                    name: name.to_string(),
                    existing: entry.unit.clone(),
                    attempted: unit.to_string(),
                });
            }

            let total = entry.quantity + quantity;
            if !total.is_finite() {
                return Err(RecappeError::InvalidQuantity(format!(
                    "total of {} is too large",
                    name
                )));
            }
            entry.quantity = total;
            return Ok(());
        }

        self.order.push(name.to_string());
        self.entries
            .insert(name.to_string(), Entry::new(quantity, unit));
        Ok(())
    }

    /// Get the entry for an item
    pub fn quantity_of(&self, name: &str) -> RecappeResult<&Entry> {
        self.entries
            .get(name)
            .ok_or_else(|| RecappeError::not_found(name))
    }

    /// Look up an item without treating absence as an error
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Check whether an item is listed
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove an item, returning its entry
    pub fn remove(&mut self, name: &str) -> RecappeResult<Entry> {
        let entry = self
            .entries
            .remove(name)
            .ok_or_else(|| RecappeError::not_found(name))?;
        self.order.retain(|n| n != name);
        Ok(entry)
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    /// Make an independent copy of this ledger
    ///
    /// Each name appears once with its own unit, so copying can never hit a
    /// unit mismatch.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Add every item of `source` to this ledger, in `source`'s order
    ///
    /// Stops at the first unit mismatch. Items merged before the failure stay
    /// merged and the remaining items are not attempted. Use
    /// [`IngredientLedger::try_merge_from`] for an all-or-nothing merge.
    pub fn merge_from(&mut self, source: &IngredientLedger) -> RecappeResult<()> {
        for (name, entry) in source {
            self.add(name, entry.quantity, &entry.unit)?;
        }
        Ok(())
    }

    /// Merge `source` into this ledger only if every item combines cleanly
    ///
    /// On failure this ledger is unchanged.
    pub fn try_merge_from(&mut self, source: &IngredientLedger) -> RecappeResult<()> {
        let mut merged = self.duplicate();
        merged.merge_from(source)?;
        *self = merged;
        Ok(())
    }

    /// Add every item of this ledger to `target`
    pub fn add_to(&self, target: &mut IngredientLedger) -> RecappeResult<()> {
        target.merge_from(self)
    }

    /// Render an item as `"<quantity> <unit> <name>"`
    pub fn describe(&self, name: &str) -> RecappeResult<String> {
        let entry = self.quantity_of(name)?;
        Ok(format!("{} {}", entry, name))
    }

    /// Number of listed items
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the ledger has no items
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Item names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Item names sorted alphabetically
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(name, entry)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            names: self.order.iter(),
            entries: &self.entries,
        }
    }
}

impl PartialEq for IngredientLedger {
    /// Ledgers are equal when they hold the same name/entry pairs, in any order
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Iterator over the items of an [`IngredientLedger`]
pub struct Iter<'a> {
    names: std::slice::Iter<'a, String>,
    entries: &'a HashMap<String, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        self.entries
            .get(name)
            .map(|entry| (name.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'a> IntoIterator for &'a IngredientLedger {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for IngredientLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, entry) in self {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

struct LedgerVisitor;

impl<'de> Visitor<'de> for LedgerVisitor {
    type Value = IngredientLedger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of item name to [quantity, unit]")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ledger = IngredientLedger::new();
        while let Some((name, entry)) = access.next_entry::<String, Entry>()? {
            ledger
                .add(&name, entry.quantity, &entry.unit)
                .map_err(de::Error::custom)?;
        }
        Ok(ledger)
    }
}

impl<'de> Deserialize<'de> for IngredientLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LedgerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn onions_and_shallots() -> IngredientLedger {
        let mut ledger = IngredientLedger::new();
        ledger.add("onions", 3, "whole").unwrap();
        ledger.add("shallots", 5, "chopped").unwrap();
        ledger
    }

    #[test]
    fn test_add_new_item() {
        let mut ledger = IngredientLedger::new();
        ledger.add("onions", 3, "whole").unwrap();

        assert_eq!(ledger.quantity_of("onions").unwrap(), &Entry::new(3, "whole"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_same_unit_sums() {
        let mut ledger = IngredientLedger::new();
        ledger.add("flour", 2, "cups").unwrap();
        ledger.add("flour", 1.5, "cups").unwrap();

        assert_eq!(ledger.quantity_of("flour").unwrap(), &Entry::new(3.5, "cups"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_unit_mismatch_leaves_entry_unchanged() {
        let mut ledger = onions_and_shallots();

        let err = ledger.add("onions", 3, "diced").unwrap_err();
        assert!(err.is_unit_mismatch());
        assert_eq!(ledger.quantity_of("onions").unwrap(), &Entry::new(3, "whole"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut ledger = IngredientLedger::new();
        ledger.add("Onions", 1, "whole").unwrap();
        ledger.add("onions", 1, "diced").unwrap();

        assert_eq!(ledger.len(), 2);
        assert!(ledger.quantity_of("ONIONS").unwrap_err().is_not_found());
    }

    #[test]
    fn test_zero_and_negative_pass_through() {
        let mut ledger = IngredientLedger::new();
        ledger.add("salt", 0, "pinch").unwrap();
        ledger.add("salt", -2, "pinch").unwrap();

        assert_eq!(ledger.quantity_of("salt").unwrap(), &Entry::new(-2, "pinch"));
        assert_eq!(ledger.describe("salt").unwrap(), "-2 pinch salt");
    }

    #[test]
    fn test_overflowing_sum_is_rejected() {
        let mut ledger = IngredientLedger::new();
        let huge = Quantity::parse("1e308").unwrap();
        ledger.add("salt", huge, "grains").unwrap();

        let err = ledger.add("salt", huge, "grains").unwrap_err();
        assert!(matches!(err, RecappeError::InvalidQuantity(_)));
        assert_eq!(ledger.quantity_of("salt").unwrap(), &Entry::new(huge, "grains"));
        assert!(ledger.quantity_of("salt").unwrap().quantity.is_finite());
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut ledger = IngredientLedger::new();
        assert!(ledger.add("salt", f64::INFINITY, "grains").is_err());
        assert!(ledger.add("salt", f64::NAN, "grains").is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut ledger = onions_and_shallots();

        let removed = ledger.remove("onions").unwrap();
        assert_eq!(removed, Entry::new(3, "whole"));
        assert!(ledger.quantity_of("onions").unwrap_err().is_not_found());
        assert!(ledger.remove("onions").unwrap_err().is_not_found());
        assert_eq!(ledger.names().collect::<Vec<_>>(), vec!["shallots"]);
    }

    #[test]
    fn test_readding_after_remove_goes_to_end() {
        let mut ledger = onions_and_shallots();
        ledger.remove("onions").unwrap();
        ledger.add("onions", 1, "diced").unwrap();

        assert_eq!(
            ledger.names().collect::<Vec<_>>(),
            vec!["shallots", "onions"]
        );
        assert_eq!(ledger.quantity_of("onions").unwrap(), &Entry::new(1, "diced"));
    }

    #[test]
    fn test_clear() {
        let mut ledger = onions_and_shallots();
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.names().count(), 0);

        // Clearing an empty ledger is fine too
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = onions_and_shallots();
        let copy = original.duplicate();
        original.clear();

        assert!(original.is_empty());
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.quantity_of("onions").unwrap(), &Entry::new(3, "whole"));
        assert_eq!(copy.quantity_of("shallots").unwrap(), &Entry::new(5, "chopped"));
    }

    #[test]
    fn test_describe() {
        let ledger = onions_and_shallots();
        assert_eq!(ledger.describe("onions").unwrap(), "3 whole onions");
        assert!(ledger.describe("garlic").unwrap_err().is_not_found());
    }

    #[test]
    fn test_iteration_is_insertion_order() {
        let mut ledger = IngredientLedger::new();
        ledger.add("zucchini", 1, "whole").unwrap();
        ledger.add("apples", 2, "whole").unwrap();
        ledger.add("milk", 1, "gallon").unwrap();

        assert_eq!(
            ledger.names().collect::<Vec<_>>(),
            vec!["zucchini", "apples", "milk"]
        );
        assert_eq!(ledger.sorted_names(), vec!["apples", "milk", "zucchini"]);
    }

    #[test]
    fn test_merge_from_sums_compatible_items() {
        let mut list = onions_and_shallots();
        let mut recipe = IngredientLedger::new();
        recipe.add("onions", 2, "whole").unwrap();
        recipe.add("garlic", 4, "cloves").unwrap();

        list.merge_from(&recipe).unwrap();

        assert_eq!(list.quantity_of("onions").unwrap(), &Entry::new(5, "whole"));
        assert_eq!(list.quantity_of("garlic").unwrap(), &Entry::new(4, "cloves"));
        assert_eq!(list.len(), 3);
        // Source is untouched
        assert_eq!(recipe.len(), 2);
    }

    #[test]
    fn test_merge_from_is_partial_on_mismatch() {
        let mut list = onions_and_shallots();
        let mut recipe = IngredientLedger::new();
        recipe.add("garlic", 4, "cloves").unwrap();
        recipe.add("onions", 1, "diced").unwrap();
        recipe.add("basil", 1, "bunch").unwrap();

        let err = list.merge_from(&recipe).unwrap_err();
        assert!(err.is_unit_mismatch());

        // Items before the conflict were merged, items after were not attempted
        assert!(list.contains("garlic"));
        assert_eq!(list.quantity_of("onions").unwrap(), &Entry::new(3, "whole"));
        assert!(!list.contains("basil"));
    }

    #[test]
    fn test_try_merge_from_is_all_or_nothing() {
        let mut list = onions_and_shallots();
        let before = list.duplicate();
        let mut recipe = IngredientLedger::new();
        recipe.add("garlic", 4, "cloves").unwrap();
        recipe.add("onions", 1, "diced").unwrap();

        assert!(list.try_merge_from(&recipe).unwrap_err().is_unit_mismatch());
        assert_eq!(list, before);
        assert!(!list.contains("garlic"));
    }

    #[test]
    fn test_add_to_targets_other_ledger() {
        let recipe = onions_and_shallots();
        let mut list = IngredientLedger::new();
        recipe.add_to(&mut list).unwrap();
        recipe.add_to(&mut list).unwrap();

        assert_eq!(list.quantity_of("onions").unwrap(), &Entry::new(6, "whole"));
        assert_eq!(list.quantity_of("shallots").unwrap(), &Entry::new(10, "chopped"));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut ledger = IngredientLedger::new();
        ledger.add("shallots", 5, "chopped").unwrap();
        ledger.add("onions", 3, "whole").unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"shallots":[5,"chopped"],"onions":[3,"whole"]}"#);
    }

    #[test]
    fn test_deserialize_keeps_file_order() {
        let json = r#"{"zucchini": [1, "whole"], "apples": [2, "whole"]}"#;
        let ledger: IngredientLedger = serde_json::from_str(json).unwrap();

        assert_eq!(ledger.names().collect::<Vec<_>>(), vec!["zucchini", "apples"]);
    }

    #[test]
    fn test_deserialize_duplicate_keys_with_different_units_fails() {
        let json = r#"{"onions": [1, "whole"], "onions": [2, "diced"]}"#;
        assert!(serde_json::from_str::<IngredientLedger>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<IngredientLedger>(r#"[["onions", 3]]"#).is_err());
        assert!(serde_json::from_str::<IngredientLedger>(r#"{"onions": 3}"#).is_err());
    }

    fn arb_ledger() -> impl Strategy<Value = Vec<(String, i64, String)>> {
        prop::collection::vec(("[a-e]{1,3}", 0i64..1000, "(whole|cups|ounces)"), 0..12)
    }

    proptest! {
        #[test]
        fn proptest_same_unit_adds_sum(
            name in "[a-z]{1,12}",
            q1 in 0i64..100_000,
            q2 in 0i64..100_000,
            unit in "[a-z]{1,8}",
        ) {
            let mut ledger = IngredientLedger::new();
            ledger.add(&name, q1, &unit).unwrap();
            ledger.add(&name, q2, &unit).unwrap();
            prop_assert_eq!(ledger.quantity_of(&name).unwrap(), &Entry::new(q1 + q2, unit.as_str()));
        }

        #[test]
        fn proptest_different_unit_always_rejected(
            name in "[a-z]{1,12}",
            q1 in 0i64..1000,
            q2 in 0i64..1000,
            unit in "[a-z]{1,8}",
            other in "[A-Z]{1,8}",
        ) {
            let mut ledger = IngredientLedger::new();
            ledger.add(&name, q1, &unit).unwrap();
            let err = ledger.add(&name, q2, &other).unwrap_err();
            prop_assert!(err.is_unit_mismatch());
            prop_assert_eq!(ledger.quantity_of(&name).unwrap(), &Entry::new(q1, unit.as_str()));
        }

        #[test]
        fn proptest_merge_equals_replay(a in arb_ledger(), b in arb_ledger()) {
            // Give every name a single unit so both ledgers are compatible
            let unit_for = |name: &str| format!("unit-{}", name);

            let mut source = IngredientLedger::new();
            for (name, qty, _) in &a {
                source.add(name, *qty, &unit_for(name.as_str())).unwrap();
            }
            let mut merged = IngredientLedger::new();
            for (name, qty, _) in &b {
                merged.add(name, *qty, &unit_for(name.as_str())).unwrap();
            }
            let mut replayed = merged.duplicate();

            merged.merge_from(&source).unwrap();
            for (name, qty, _) in &a {
                replayed.add(name, *qty, &unit_for(name.as_str())).unwrap();
            }
            prop_assert_eq!(merged, replayed);
        }

        #[test]
        fn proptest_duplicate_matches_and_is_independent(items in arb_ledger()) {
            let mut original = IngredientLedger::new();
            for (name, qty, unit) in &items {
                let _ = original.add(name, *qty, unit);
            }
            let mut copy = original.duplicate();
            prop_assert_eq!(&copy, &original);

            let snapshot: Vec<(String, Entry)> = original
                .iter()
                .map(|(n, e)| (n.to_string(), e.clone()))
                .collect();
            copy.add("never-in-original", 1, "whole").unwrap();
            for (name, entry) in &snapshot {
                let _ = copy.remove(name);
                prop_assert_eq!(original.quantity_of(name).unwrap(), entry);
            }
            prop_assert!(!original.contains("never-in-original"));
        }
    }
}
