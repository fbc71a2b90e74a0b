//! Monetary amount carried by an order.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order total.
///
/// The remote API sends totals as plain JSON numbers with no currency, so
/// the amount is decoded from a float into a `Decimal` and shown without any
/// currency formatting. Display drops trailing zeros, so `120.50` renders as
/// `120.5` and `42.0` as `42`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_trailing_zeros() {
        assert_eq!(Amount::new(Decimal::new(12050, 2)).to_string(), "120.5");
        assert_eq!(Amount::new(Decimal::new(420, 1)).to_string(), "42");
        assert_eq!(Amount::new(Decimal::new(1999, 2)).to_string(), "19.99");
    }

    #[test]
    fn test_deserialize_from_json_numbers() {
        let a: Amount = serde_json::from_str("19.99").unwrap();
        assert_eq!(a.to_string(), "19.99");

        let b: Amount = serde_json::from_str("250").unwrap();
        assert_eq!(b.to_string(), "250");
    }

    #[test]
    fn test_ordering() {
        let small: Amount = serde_json::from_str("9.5").unwrap();
        let large: Amount = serde_json::from_str("10").unwrap();
        assert!(small < large);
    }
}
