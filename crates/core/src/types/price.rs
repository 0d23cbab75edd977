//! Type-safe price representation using decimal arithmetic.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the store currency.
///
/// Wraps [`Decimal`] so float arithmetic never touches money. Serialized as
/// a decimal string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

/// Displays with two fraction digits (e.g., "19.99").
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_fraction_digits() {
        let price = Price::new(Decimal::new(195, 1)); // 19.5
        assert_eq!(price.to_string(), "19.50");

        let exact = Price::new(Decimal::new(12900, 2)); // 129.00
        assert_eq!(exact.to_string(), "129.00");
    }

    #[test]
    fn test_wire_format_is_a_string() {
        let price = Price::new(Decimal::new(1999, 2));
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"19.99\"");

        let back: Price = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(back, price);
    }
}
