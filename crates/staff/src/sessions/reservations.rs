//! Reservation management screen session.

use brasserie_core::reservation::Reservation;
use brasserie_core::roster::{Reconciled, Roster, RosterEdit};
use brasserie_core::types::TableNumber;
use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::forms::ReservationFormResult;

/// The reservation management screen: a roster of reservations plus the
/// operations the screen exposes.
#[derive(Debug, Clone, Default)]
pub struct ReservationSession {
    roster: Roster<Reservation>,
}

impl ReservationSession {
    /// A session over an existing roster.
    #[must_use]
    pub const fn new(roster: Roster<Reservation>) -> Self {
        Self { roster }
    }

    /// A session seeded with the sample reservations shown on first
    /// launch.
    #[must_use]
    pub fn with_sample_reservations() -> Self {
        Self::new(Roster::from(vec![
            seed("Alice Smith", (2024, 6, 10), (18, 0), 2),
            seed("Bob Johnson", (2024, 6, 10), (19, 30), 4),
            seed("Charlie Brown", (2024, 6, 11), (20, 0), 8),
        ]))
    }

    /// The reservations in display order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        self.roster.records()
    }

    /// Apply a saved add/edit form.
    pub fn save(&mut self, result: ReservationFormResult) -> Reconciled {
        let customer = result.reservation.customer_name.clone();
        let applied = self.roster.reconcile(result.into_edit());
        match applied {
            Reconciled::Inserted(index) => info!(%customer, index, "reservation added"),
            Reconciled::Changed(index) => info!(%customer, index, "reservation updated"),
            Reconciled::Stale => warn!(%customer, "reservation save hit a stale position"),
            Reconciled::Removed(_) => {}
        }
        applied
    }

    /// The user confirmed a delete for the reservation at `index`.
    pub fn delete_confirmed(&mut self, index: usize) -> Reconciled {
        let customer = self.roster.get(index).map(|r| r.customer_name.clone());
        let applied = self.roster.reconcile(RosterEdit::Remove { index });
        match (&applied, customer) {
            (Reconciled::Removed(_), Some(customer)) => {
                info!(%customer, index, "reservation deleted");
            }
            _ => warn!(index, "reservation delete hit a stale position"),
        }
        applied
    }
}

/// Build one statically-valid sample reservation.
fn seed(customer: &str, (y, m, d): (i32, u32, u32), (hh, mm): (u32, u32), table: u32) -> Reservation {
    // All arguments are literals checked by the seed tests.
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(hh, mm, 0).unwrap_or_default();
    let table = TableNumber::new(table).unwrap_or(TableNumber::MIN);
    Reservation::new(customer, date, time, table)
}
