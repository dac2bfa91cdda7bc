//! Brasserie Staff - Application layer for the staff tools.
//!
//! Everything between the core types and a presentation layer:
//!
//! - [`forms`] - Form state machines for login, sign-up, and the two
//!   add/edit screens
//! - [`auth`] - The placeholder authentication backend with its sample
//!   directory and simulated latency
//! - [`sessions`] - The menu and reservation management screens
//! - [`prefs`] - The remembered-login preferences file
//! - [`config`] - Environment-variable configuration
//!
//! # Architecture
//!
//! A front end feeds raw user events (keystrokes, blurs, picker
//! results, button presses) into the forms and sessions here and
//! renders whatever display state comes back. Deferred auth attempts
//! are futures that race a cancellation token, so navigating away
//! cleanly abandons an in-flight login.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod forms;
pub mod prefs;
pub mod sessions;

pub use auth::{AuthError, AuthService, LoginOutcome, SignupOutcome};
pub use config::{ConfigError, StaffConfig};
pub use forms::{LoginForm, MenuItemForm, ReservationForm, SignupForm};
pub use prefs::{Preferences, PrefsError, PrefsStore};
pub use sessions::{MenuSession, ReservationSession};
