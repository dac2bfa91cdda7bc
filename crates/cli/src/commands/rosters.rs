//! Show the seeded sample rosters.

use brasserie_staff::sessions::{MenuSession, ReservationSession};
use tracing::info;

/// List the sample menu and reservation rosters in display order.
pub fn show() {
    let menu = MenuSession::with_sample_menu();
    for (index, item) in menu.items().iter().enumerate() {
        info!(index, name = %item.name, price = %item.price, "menu item");
    }

    let reservations = ReservationSession::with_sample_reservations();
    for (index, reservation) in reservations.reservations().iter().enumerate() {
        info!(
            index,
            customer = %reservation.customer_name,
            date = %reservation.date_display(),
            time = %reservation.time_display(),
            table = %reservation.table,
            "reservation"
        );
    }
}
