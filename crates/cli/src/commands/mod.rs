//! CLI command implementations.

pub mod login;
pub mod rosters;
pub mod validate;
