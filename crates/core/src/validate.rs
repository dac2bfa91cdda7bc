//! Form-field validation rules and the password-strength heuristic.
//!
//! Every function here is pure and total: each input, including the empty
//! string, has a defined classification. Field errors are user-visible
//! and stay local to the form that produced them. Where a field carries a
//! typed value (email, price, table number) the validator returns the
//! parsed value so callers never re-parse.

use core::fmt;

use crate::types::{Email, EmailError, Price, PriceError, TableNumber, TableNumberError};

/// Minimum password length accepted by the sign-up form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Password length that earns the strength bonus.
const STRONG_LENGTH: usize = 8;

/// Points contributed by each satisfied strength factor.
const FACTOR_POINTS: u8 = 25;

/// Punctuation characters that count toward password strength.
const STRENGTH_PUNCTUATION: &[char] = &['@', '#', '$', '%', '^', '&', '+', '='];

/// Why a form field failed validation.
///
/// These are the inline messages shown next to a field; they never
/// propagate past the form.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is required but empty.
    #[error("this field is required")]
    Empty,
    /// The value does not match the expected grammar (email).
    #[error("invalid email format")]
    BadFormat,
    /// The password is shorter than the minimum.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The confirmation does not match the password.
    #[error("passwords do not match")]
    Mismatch,
    /// The value must be a non-negative decimal number.
    #[error("must be a number")]
    NotNumeric,
    /// The value must be a positive whole number.
    #[error("must be a whole number greater than zero")]
    NotInteger,
}

/// Require a non-empty value.
///
/// Used for name fields, and for date/time placeholders before a value
/// has been picked.
///
/// # Errors
///
/// Returns [`FieldError::Empty`] for the empty string.
pub fn non_empty(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Empty)
    } else {
        Ok(())
    }
}

/// Validate an email field, returning the parsed [`Email`].
///
/// # Errors
///
/// Returns [`FieldError::Empty`] for the empty string and
/// [`FieldError::BadFormat`] for anything [`Email::parse`] rejects.
pub fn email(value: &str) -> Result<Email, FieldError> {
    Email::parse(value).map_err(|e| match e {
        EmailError::Empty => FieldError::Empty,
        _ => FieldError::BadFormat,
    })
}

/// Validate a password field.
///
/// # Errors
///
/// Returns [`FieldError::TooShort`] when the password has fewer than
/// [`MIN_PASSWORD_LENGTH`] characters.
pub fn password(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        Err(FieldError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Validate the confirm-password field against the password.
///
/// # Errors
///
/// Returns [`FieldError::Mismatch`] unless the two strings are
/// character-identical.
pub fn confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password == confirm {
        Ok(())
    } else {
        Err(FieldError::Mismatch)
    }
}

/// Validate a price field, returning the parsed [`Price`].
///
/// # Errors
///
/// Returns [`FieldError::Empty`] for the empty string and
/// [`FieldError::NotNumeric`] when the value is not a non-negative
/// decimal.
pub fn price(value: &str) -> Result<Price, FieldError> {
    Price::parse(value).map_err(|e| match e {
        PriceError::Empty => FieldError::Empty,
        PriceError::NotNumeric | PriceError::Negative => FieldError::NotNumeric,
    })
}

/// Validate a table-number field, returning the parsed [`TableNumber`].
///
/// # Errors
///
/// Returns [`FieldError::Empty`] for the empty string and
/// [`FieldError::NotInteger`] when the value is not a positive integer.
pub fn table_number(value: &str) -> Result<TableNumber, FieldError> {
    TableNumber::parse(value).map_err(|e| match e {
        TableNumberError::Empty => FieldError::Empty,
        TableNumberError::NotInteger | TableNumberError::Zero => FieldError::NotInteger,
    })
}

/// Score a password from 0 to 100.
///
/// Four independent factors are worth 25 points each: length of at
/// least 8, a digit, an uppercase letter, and one of `@ # $ % ^ & + =`.
/// Adding a satisfied factor never lowers the score.
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= STRONG_LENGTH {
        score += FACTOR_POINTS;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += FACTOR_POINTS;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += FACTOR_POINTS;
    }
    if password.chars().any(|c| STRENGTH_PUNCTUATION.contains(&c)) {
        score += FACTOR_POINTS;
    }
    score
}

/// The strength meter value for a password, or `None` when the password
/// is empty and the meter should be hidden.
#[must_use]
pub fn strength_indicator(password: &str) -> Option<(u8, Strength)> {
    if password.is_empty() {
        return None;
    }
    let score = password_strength(password);
    Some((score, Strength::classify(score)))
}

/// Qualitative password-strength tier shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Classify a 0-100 score: below 30 is weak, below 70 is medium,
    /// 70 and above is strong.
    #[must_use]
    pub const fn classify(score: u8) -> Self {
        if score < 30 {
            Self::Weak
        } else if score < 70 {
            Self::Medium
        } else {
            Self::Strong
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
        }
    }
}
