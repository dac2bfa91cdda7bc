//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price must be a number")]
    NotNumeric,
    /// The input parses but is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative menu price.
///
/// Prices use decimal arithmetic rather than floating point so that
/// `12.50` stays `12.50`. The app is single-currency; amounts display as
/// `$x.xx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Parse a `Price` from a raw form field.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number,
    /// or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(s).map_err(|_| PriceError::NotNumeric)?;
        Self::new(amount)
    }

    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Create a `Price` from a whole number of cents. Infallible, so
    /// suitable for statically-known amounts.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    /// Formats like the list rows do: `$12.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert!(Price::parse("12.50").is_ok());
        assert!(Price::parse("0").is_ok());
        assert!(Price::parse("8").is_ok());
        assert!(Price::parse("14.75").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Price::parse(""), Err(PriceError::Empty)));
    }

    #[test]
    fn test_parse_not_numeric() {
        assert!(matches!(Price::parse("abc"), Err(PriceError::NotNumeric)));
        assert!(matches!(
            Price::parse("12.5.0"),
            Err(PriceError::NotNumeric)
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Price::parse("-1"), Err(PriceError::Negative)));
        assert!(matches!(
            Price::parse("-0.01"),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let price = Price::parse("-0").unwrap();
        assert!(price.amount().is_zero());
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Price::from_cents(1250), Price::parse("12.50").unwrap());
        assert_eq!(Price::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::parse("12.5").unwrap().to_string(), "$12.50");
        assert_eq!(Price::parse("8").unwrap().to_string(), "$8.00");
    }
}
