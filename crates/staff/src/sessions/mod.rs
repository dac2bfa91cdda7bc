//! Screen sessions: a roster of records plus the operations the
//! management screens expose over it.
//!
//! Sessions translate saved forms and confirmed deletes into roster
//! edits, apply them through the reconciliation protocol, and log the
//! outcome. They hold no display state of their own.

pub mod menu;
pub mod reservations;

pub use menu::MenuSession;
pub use reservations::ReservationSession;
