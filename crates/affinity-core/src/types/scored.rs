//! Scored result types for ranked queries.
//!
//! This module provides [`ScoredItem`] and [`ScoredPair`], the return types
//! for the ranked queries: a neighbor or candidate with its co-purchase
//! count, and a canonical pair with its count.

use serde::{Deserialize, Serialize};

use super::{Item, ItemPair};

/// An item with an associated count.
///
/// Depending on the query, the count is a co-purchase count (top neighbors),
/// an accumulated recommendation score, or a purchase frequency (projection
/// nodes). Higher counts rank first.
///
/// # Example
///
/// ```
/// use affinity_core::{Item, ScoredItem};
///
/// let scored = ScoredItem::new(Item::new("yogurt"), 2);
/// assert_eq!(scored.item.as_str(), "yogurt");
/// assert_eq!(scored.count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredItem {
    /// The item.
    pub item: Item,
    /// The count or accumulated score.
    pub count: u64,
}

impl ScoredItem {
    /// Create a new scored item.
    #[inline]
    #[must_use]
    pub const fn new(item: Item, count: u64) -> Self {
        Self { item, count }
    }
}

/// A canonical item pair with its co-purchase count.
///
/// # Example
///
/// ```
/// use affinity_core::{Item, ItemPair, ScoredPair};
///
/// let pair = ItemPair::new(Item::new("whole milk"), Item::new("yogurt"));
/// let scored = ScoredPair::new(pair, 2);
/// assert_eq!(scored.count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPair {
    /// The canonical pair.
    pub pair: ItemPair,
    /// The number of transactions in which both members appeared.
    pub count: u64,
}

impl ScoredPair {
    /// Create a new scored pair.
    #[inline]
    #[must_use]
    pub const fn new(pair: ItemPair, count: u64) -> Self {
        Self { pair, count }
    }
}
