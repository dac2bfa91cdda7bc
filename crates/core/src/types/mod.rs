//! Core types for Brasserie.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod image;
pub mod price;
pub mod table;

pub use email::{Email, EmailError};
pub use image::ImageRef;
pub use price::{Price, PriceError};
pub use table::{TableNumber, TableNumberError};
