//! Table number type.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`TableNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableNumberError {
    /// The input string is empty.
    #[error("table number cannot be empty")]
    Empty,
    /// The input is not an integer.
    #[error("table number must be a whole number")]
    NotInteger,
    /// The input parses but is zero; tables are numbered from 1.
    #[error("table number must be greater than zero")]
    Zero,
}

/// A restaurant table number, always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(u32);

impl TableNumber {
    /// The lowest valid table number.
    pub const MIN: Self = Self(1);

    /// Parse a `TableNumber` from a raw form field.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not an integer, or
    /// is zero. Negative inputs fail the integer parse.
    pub fn parse(s: &str) -> Result<Self, TableNumberError> {
        if s.is_empty() {
            return Err(TableNumberError::Empty);
        }

        let number: u32 = s.parse().map_err(|_| TableNumberError::NotInteger)?;
        Self::new(number)
    }

    /// Create a `TableNumber` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`TableNumberError::Zero`] if the number is zero.
    pub const fn new(number: u32) -> Result<Self, TableNumberError> {
        if number == 0 {
            return Err(TableNumberError::Zero);
        }
        Ok(Self(number))
    }

    /// Get the underlying number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableNumber {
    type Err = TableNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<TableNumber> for u32 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(TableNumber::parse("1").unwrap().get(), 1);
        assert_eq!(TableNumber::parse("42").unwrap().get(), 42);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(TableNumber::parse(""), Err(TableNumberError::Empty)));
    }

    #[test]
    fn test_parse_not_integer() {
        assert!(matches!(
            TableNumber::parse("four"),
            Err(TableNumberError::NotInteger)
        ));
        assert!(matches!(
            TableNumber::parse("4.5"),
            Err(TableNumberError::NotInteger)
        ));
        // u32 parse rejects negatives
        assert!(matches!(
            TableNumber::parse("-2"),
            Err(TableNumberError::NotInteger)
        ));
    }

    #[test]
    fn test_parse_zero() {
        assert!(matches!(TableNumber::parse("0"), Err(TableNumberError::Zero)));
    }

    #[test]
    fn test_display() {
        assert_eq!(TableNumber::parse("8").unwrap().to_string(), "8");
    }
}
