//! Error types for the core crate.

use thiserror::Error;

use crate::catalog::Category;
use crate::types::Item;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The same item was assigned two different categories.
    #[error("conflicting categories for item '{item}': '{existing}' and '{requested}'")]
    ConflictingCategory {
        /// The item with conflicting assignments.
        item: Item,
        /// The category already recorded for the item.
        existing: Category,
        /// The category the caller tried to assign.
        requested: Category,
    },
}
