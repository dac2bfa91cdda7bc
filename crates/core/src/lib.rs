//! Brasserie Core - Shared types and logic library.
//!
//! This crate provides the pieces of the staff app that are independent of
//! any presentation layer:
//!
//! - [`types`] - Newtype wrappers for emails, prices, table numbers, and
//!   opaque image handles
//! - [`validate`] - The form-field validator rule set and the
//!   password-strength heuristic
//! - [`menu`] / [`reservation`] - The two record types managed by the
//!   staff screens
//! - [`roster`] - The ordered collection with the add/edit/delete
//!   reconciliation protocol
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no timers,
//! no UI state. The application layer (`brasserie-staff`) feeds it raw
//! field strings and index-scoped edit intents and turns the results into
//! display updates.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod menu;
pub mod reservation;
pub mod roster;
pub mod types;
pub mod validate;

pub use menu::MenuItem;
pub use reservation::Reservation;
pub use roster::{Reconciled, Roster, RosterEdit, RosterError};
pub use types::*;
pub use validate::{FieldError, Strength};
