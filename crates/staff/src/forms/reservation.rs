//! Add/edit reservation form.

use brasserie_core::reservation::Reservation;
use brasserie_core::roster::RosterEdit;
use brasserie_core::validate::{self, FieldError};
use chrono::{NaiveDate, NaiveTime};

/// The inline errors shown next to the reservation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFormErrors {
    pub customer_name: Option<FieldError>,
    pub date: Option<FieldError>,
    pub time: Option<FieldError>,
    pub table: Option<FieldError>,
}

impl ReservationFormErrors {
    /// Whether no field shows an error.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.customer_name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.table.is_none()
    }
}

/// A saved form: the record plus the position it came from (`None` for
/// a new reservation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationFormResult {
    pub reservation: Reservation,
    pub position: Option<usize>,
}

impl ReservationFormResult {
    /// Turn the saved form into the roster edit it represents.
    #[must_use]
    pub fn into_edit(self) -> RosterEdit<Reservation> {
        match self.position {
            None => RosterEdit::Append(self.reservation),
            Some(index) => RosterEdit::Update {
                index,
                record: self.reservation,
            },
        }
    }
}

/// State machine behind the add/edit reservation screen.
///
/// Date and time come from picker dialogs, so they are typed values the
/// moment they are set; until then they show a placeholder and count as
/// missing.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    customer_name: String,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    table: String,
    position: Option<usize>,
}

impl ReservationForm {
    /// An empty form for adding a new reservation.
    #[must_use]
    pub fn add() -> Self {
        Self::default()
    }

    /// A form prefilled from an existing reservation at `position`.
    #[must_use]
    pub fn edit(reservation: &Reservation, position: usize) -> Self {
        Self {
            customer_name: reservation.customer_name.clone(),
            date: Some(reservation.date),
            time: Some(reservation.time),
            table: reservation.table.to_string(),
            position: Some(position),
        }
    }

    /// The position being edited, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// The user edited the customer name field.
    pub fn customer_name_changed(&mut self, value: &str) {
        self.customer_name = value.to_owned();
    }

    /// The user picked a date.
    pub fn date_picked(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// The user picked a time.
    pub fn time_picked(&mut self, time: NaiveTime) {
        self.time = Some(time);
    }

    /// The user edited the table number field.
    pub fn table_changed(&mut self, value: &str) {
        self.table = value.to_owned();
    }

    /// Validate and build the result, or report the field errors.
    ///
    /// # Errors
    ///
    /// Returns the inline errors when the name is empty, either picker
    /// has not been used, or the table number is not a positive integer.
    pub fn submit(&self) -> Result<ReservationFormResult, ReservationFormErrors> {
        let name = self.customer_name.trim();
        let errors = ReservationFormErrors {
            customer_name: validate::non_empty(name).err(),
            date: self.date.map_or(Some(FieldError::Empty), |_| None),
            time: self.time.map_or(Some(FieldError::Empty), |_| None),
            table: validate::table_number(self.table.trim()).err(),
        };

        match (self.date, self.time, validate::table_number(self.table.trim())) {
            (Some(date), Some(time), Ok(table)) if errors.is_clear() => {
                Ok(ReservationFormResult {
                    reservation: Reservation::new(name, date, time, table),
                    position: self.position,
                })
            }
            _ => Err(errors),
        }
    }
}
