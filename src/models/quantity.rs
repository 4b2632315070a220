//! Quantity type for ingredient amounts
//!
//! Amounts are usually whole numbers ("3 whole onions") but fractional values
//! are allowed. Whole amounts are written to disk as JSON integers so saved
//! files stay readable and match lists written by earlier versions.

use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{RecappeError, RecappeResult};

/// Largest magnitude that is written as an integer rather than a float
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// An ingredient amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    /// Create a quantity from a raw value
    ///
    /// No validation happens here; zero and negative values pass through.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is neither infinite nor NaN
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Check if the amount has no fractional part
    pub fn is_whole(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER
    }

    /// Parse a quantity typed by the user
    ///
    /// Accepts integers and decimals ("3", "2.5", " 4 "). Rejects text that is
    /// not a number, NaN, infinities and negative amounts.
    ///
    /// # Examples
    /// ```
    /// use recappe::models::Quantity;
    /// assert_eq!(Quantity::parse("3").unwrap(), Quantity::new(3.0));
    /// assert!(Quantity::parse("three").is_err());
    /// ```
    pub fn parse(s: &str) -> RecappeResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RecappeError::InvalidQuantity("no quantity given".into()));
        }

        let value: f64 = s
            .parse()
            .map_err(|_| RecappeError::InvalidQuantity(format!("'{}' is not a number", s)))?;

        if !value.is_finite() {
            return Err(RecappeError::InvalidQuantity(format!(
                "'{}' is not a finite number",
                s
            )));
        }

        if value < 0.0 {
            return Err(RecappeError::InvalidQuantity(format!(
                "'{}' is negative",
                s
            )));
        }

        // Normalize "-0" to 0
        Ok(Self(value + 0.0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(value as f64)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(ser::Error::custom(format!(
                "cannot store non-finite quantity {}",
                self.0
            )));
        }

        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_and_fractional() {
        assert_eq!(Quantity::new(3.0).to_string(), "3");
        assert_eq!(Quantity::new(2.5).to_string(), "2.5");
        assert_eq!(Quantity::new(-4.0).to_string(), "-4");
        assert_eq!(Quantity::new(0.0).to_string(), "0");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Quantity::parse("3").unwrap(), Quantity::new(3.0));
        assert_eq!(Quantity::parse(" 2.5 ").unwrap(), Quantity::new(2.5));
        assert_eq!(Quantity::parse("0").unwrap(), Quantity::new(0.0));
        assert_eq!(Quantity::parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "   ", "three", "3 cups", "NaN", "inf", "-1"] {
            let err = Quantity::parse(input).unwrap_err();
            assert!(
                matches!(err, RecappeError::InvalidQuantity(_)),
                "expected InvalidQuantity for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_arithmetic() {
        let mut q = Quantity::from(3);
        q += Quantity::from(2);
        assert_eq!(q, Quantity::new(5.0));
        assert_eq!(Quantity::new(0.5) + Quantity::new(1.0), Quantity::new(1.5));
    }

    #[test]
    fn test_serialize_whole_as_integer() {
        assert_eq!(serde_json::to_string(&Quantity::new(3.0)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Quantity::new(1.25)).unwrap(), "1.25");
    }

    #[test]
    fn test_serialize_non_finite_fails() {
        assert!(serde_json::to_string(&Quantity::new(f64::INFINITY)).is_err());
        assert!(serde_json::to_string(&Quantity::new(f64::NAN)).is_err());
        assert!(!Quantity::new(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_deserialize_integer_and_float() {
        let q: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(q, Quantity::new(7.0));
        let q: Quantity = serde_json::from_str("0.75").unwrap();
        assert_eq!(q, Quantity::new(0.75));
        assert!(serde_json::from_str::<Quantity>("\"7\"").is_err());
    }
}
