//! Ledger entry: a quantity and the unit it is measured in

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::quantity::Quantity;

/// The amount of one item, e.g. `3 whole` or `8 ounces`
///
/// Stored on disk as a two element array `[quantity, unit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// How much of the item
    pub quantity: Quantity,
    /// Free-form qualifier ("ounces", "whole", "chopped")
    pub unit: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(quantity: impl Into<Quantity>, unit: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Two entries can be combined only when their units are identical
    pub fn is_compatible(&self, unit: &str) -> bool {
        self.unit == unit
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.quantity, &self.unit).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (quantity, unit) = <(Quantity, String)>::deserialize(deserializer)?;
        Ok(Self { quantity, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_is_exact_match() {
        let entry = Entry::new(3, "whole");
        assert!(entry.is_compatible("whole"));
        assert!(!entry.is_compatible("Whole"));
        assert!(!entry.is_compatible("diced"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Entry::new(8, "ounces").to_string(), "8 ounces");
        assert_eq!(Entry::new(1.5, "cups").to_string(), "1.5 cups");
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Entry::new(3, "whole")).unwrap();
        assert_eq!(json, r#"[3,"whole"]"#);
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<Entry>(r#"[3]"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"[3, "whole", 1]"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"["3", "whole"]"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"quantity": 3}"#).is_err());

        let entry: Entry = serde_json::from_str(r#"[2.5, "cups"]"#).unwrap();
        assert_eq!(entry, Entry::new(2.5, "cups"));
    }
}
