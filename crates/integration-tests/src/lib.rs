//! Integration tests for the Brasserie staff app.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brasserie-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `login_flow` - Login form, auth service, and preferences together
//! - `signup_flow` - Sign-up form validation triggers and registration
//! - `roster_flow` - Add/edit/delete flows over the management screens
//!
//! The tests drive the application layer the way a front end would:
//! raw field events in, display state and outcomes out. Deferred auth
//! completions run under tokio's paused test clock, so no test sleeps
//! for real.

use chrono::{NaiveDate, NaiveTime};

/// A date literal for test fixtures.
///
/// # Panics
///
/// Panics when the literal is not a real calendar date.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A time literal for test fixtures.
///
/// # Panics
///
/// Panics when the literal is not a valid time of day.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
