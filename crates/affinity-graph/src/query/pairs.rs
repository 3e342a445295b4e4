//! Most popular item combinations across the whole graph.

use affinity_core::ScoredPair;

use crate::store::CoPurchaseGraph;

/// Default number of pairs returned.
pub const DEFAULT_PAIR_LIMIT: usize = 3;

/// Configuration for the top-pairs query.
#[derive(Debug, Clone)]
pub struct TopPairsConfig {
    /// Maximum number of pairs to return.
    /// Default: 3
    pub limit: usize,
}

impl Default for TopPairsConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_PAIR_LIMIT }
    }
}

impl TopPairsConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of pairs to return.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Query for the item pairs with the highest co-purchase counts.
pub struct TopPairs;

impl TopPairs {
    /// Compute the highest-counted pairs.
    ///
    /// Each distinct pair is considered exactly once despite the symmetric
    /// storage. Pairs are ordered by count descending, ties broken by
    /// ascending canonical pair order, truncated to the configured limit;
    /// fewer than `limit` pairs are all returned.
    #[must_use]
    pub fn compute(graph: &CoPurchaseGraph, config: &TopPairsConfig) -> Vec<ScoredPair> {
        let mut ranked: Vec<ScoredPair> = graph.pairs().collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pair.cmp(&b.pair)));
        ranked.truncate(config.limit);
        ranked
    }
}
