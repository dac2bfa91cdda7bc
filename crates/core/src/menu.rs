//! Menu item record.

use serde::{Deserialize, Serialize};

use crate::types::{ImageRef, Price};

/// A single item on the restaurant menu.
///
/// Records carry no identifier of their own: a menu item is addressed by
/// its position in the owning [`Roster`](crate::roster::Roster).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Name of the dish, e.g. "Pizza Margherita". Never empty.
    pub name: String,
    /// Price of the dish.
    pub price: Price,
    /// Opaque handle to the item's picture.
    pub image: ImageRef,
}

impl MenuItem {
    /// Create a menu item from already-validated parts.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, image: ImageRef) -> Self {
        Self {
            name: name.into(),
            price,
            image,
        }
    }
}
