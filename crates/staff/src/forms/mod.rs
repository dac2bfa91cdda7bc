//! Form state machines for the staff screens.
//!
//! Each form owns the raw field values and the visibility rules for its
//! errors; validation itself lives in `brasserie_core::validate`. Forms
//! never perform I/O: submitting yields a typed request or result for
//! the caller to act on.

pub mod login;
pub mod menu_item;
pub mod reservation;
pub mod signup;

pub use login::{LoginDisplay, LoginForm, LoginRequest};
pub use menu_item::{MenuItemForm, MenuItemFormErrors, MenuItemFormResult};
pub use reservation::{ReservationForm, ReservationFormErrors, ReservationFormResult};
pub use signup::{SignupDisplay, SignupErrors, SignupField, SignupForm, SignupRequest};
