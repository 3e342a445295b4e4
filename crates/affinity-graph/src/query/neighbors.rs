//! Top co-purchased neighbors of a single item.

use affinity_core::{Item, ScoredItem};

use crate::store::CoPurchaseGraph;

/// Default number of neighbors returned.
pub const DEFAULT_NEIGHBOR_LIMIT: usize = 5;

/// Configuration for the top-neighbors query.
#[derive(Debug, Clone)]
pub struct TopNeighborsConfig {
    /// Maximum number of neighbors to return.
    /// Default: 5
    pub limit: usize,
}

impl Default for TopNeighborsConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_NEIGHBOR_LIMIT }
    }
}

impl TopNeighborsConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of neighbors to return.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Query for the items most frequently co-purchased with a target item.
pub struct TopNeighbors;

impl TopNeighbors {
    /// Compute the target's neighbors ranked by co-purchase count.
    ///
    /// Returns an empty vec when the target is unknown or has no recorded
    /// co-purchases. Otherwise neighbors are ordered by count descending,
    /// ties broken by ascending item order, truncated to the configured
    /// limit; fewer than `limit` neighbors are all returned.
    #[must_use]
    pub fn compute(
        graph: &CoPurchaseGraph,
        target: &Item,
        config: &TopNeighborsConfig,
    ) -> Vec<ScoredItem> {
        let Some(neighbors) = graph.neighbors(target) else {
            return Vec::new();
        };

        let mut ranked: Vec<ScoredItem> = neighbors
            .iter()
            .map(|(item, &count)| ScoredItem::new(item.clone(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
        ranked.truncate(config.limit);
        ranked
    }
}
