//! Error types for graph invariant checks.

use affinity_core::{Item, ItemPair};
use thiserror::Error;

/// Invariant violations reportable by [`CoPurchaseGraph::validate`].
///
/// Normal operation cannot produce these: every write updates both directions
/// of a pair as a unit. They exist to catch corruption introduced by unsafe
/// embedding (for example, lost updates from unsynchronized concurrent
/// writers).
///
/// [`CoPurchaseGraph::validate`]: super::CoPurchaseGraph::validate
#[derive(Debug, Error)]
pub enum GraphError {
    /// An item appears as its own neighbor.
    #[error("item is recorded as its own neighbor: {0}")]
    SelfLoop(Item),

    /// A relationship is recorded in one direction but not the other.
    #[error("missing reverse entry for relationship {from} -> {to}")]
    MissingReverse {
        /// The endpoint that carries the entry.
        from: Item,
        /// The endpoint that lacks it.
        to: Item,
    },

    /// The two directions of a relationship disagree on the count.
    #[error("asymmetric counts for pair {pair}: {forward} vs {reverse}")]
    AsymmetricCounts {
        /// The pair with mismatched entries.
        pair: ItemPair,
        /// Count stored under the first member.
        forward: u64,
        /// Count stored under the second member.
        reverse: u64,
    },

    /// A co-purchase count exceeds the frequency of one of its endpoints.
    #[error("co-purchase count {count} for pair {pair} exceeds frequency {frequency} of '{item}'")]
    CountExceedsFrequency {
        /// The pair whose count is out of bounds.
        pair: ItemPair,
        /// The endpoint whose frequency is exceeded.
        item: Item,
        /// The offending co-purchase count.
        count: u64,
        /// The endpoint's recorded frequency.
        frequency: u64,
    },
}

/// Result type for graph invariant checks.
pub type GraphResult<T> = Result<T, GraphError>;
