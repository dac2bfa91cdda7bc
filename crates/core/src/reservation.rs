//! Reservation record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::TableNumber;

/// Display format for reservation dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for reservation times (`HH:MM`, 24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

/// A single customer reservation.
///
/// Like [`MenuItem`](crate::menu::MenuItem), reservations are addressed
/// by position in the owning roster, not by a stable key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    /// Name of the person who booked. Never empty.
    pub customer_name: String,
    /// Date of the booking.
    pub date: NaiveDate,
    /// Time of the booking (24-hour).
    pub time: NaiveTime,
    /// The table they've been assigned.
    pub table: TableNumber,
}

impl Reservation {
    /// Create a reservation from already-validated parts.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        table: TableNumber,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            date,
            time,
            table,
        }
    }

    /// The date formatted for display (`YYYY-MM-DD`).
    #[must_use]
    pub fn date_display(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// The time formatted for display (`HH:MM`).
    #[must_use]
    pub fn time_display(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}
