//! Item identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// The analysis never inspects an item's internal structure; it only compares
/// items for equality and order. Items are ordered lexicographically, and
/// every ranked query uses that ordering as its deterministic tie-break, so
/// two runs over the same data always produce the same output.
///
/// # Example
///
/// ```
/// use affinity_core::Item;
///
/// let item = Item::new("whole milk");
/// assert_eq!(item.as_str(), "whole milk");
///
/// // Also works via From
/// let other: Item = "yogurt".into();
/// assert!(item < other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Item(String);

impl Item {
    /// Create a new item identifier.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the underlying string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Item {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Item {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Item {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
