//! Opaque image reference.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque handle to a menu item image.
///
/// The handle is a URI or resource identifier chosen by the presentation
/// layer. The core passes it through unchanged and never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a presentation-layer image handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The stand-in image used when no picture has been selected.
    #[must_use]
    pub fn placeholder() -> Self {
        Self("res://placeholder".to_owned())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
