//! Recommendation scoring from a set of input items.

use std::collections::{HashMap, HashSet};

use affinity_core::{Item, ScoredItem};

use crate::store::CoPurchaseGraph;

/// Default number of recommendations returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Configuration for the recommendation query.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Maximum number of candidates to return.
    /// Default: 5
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_RECOMMENDATION_LIMIT }
    }
}

impl RecommendationConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of candidates to return.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Query for items likely to be co-purchased with a set of input items.
pub struct Recommendation;

impl Recommendation {
    /// Score candidates against the input items.
    ///
    /// For each input item present in the graph, every neighbor's count is
    /// added to that neighbor's running score, so a candidate co-purchased
    /// with several inputs accumulates all contributions. Input items are
    /// never produced as candidates, even when they co-occur with another
    /// input. Candidates are ordered by score descending, ties broken by
    /// ascending item order, truncated to the configured limit. Empty input
    /// yields an empty result.
    #[must_use]
    pub fn compute(
        graph: &CoPurchaseGraph,
        inputs: &[Item],
        config: &RecommendationConfig,
    ) -> Vec<ScoredItem> {
        let input_set: HashSet<&Item> = inputs.iter().collect();
        let mut scores: HashMap<&Item, u64> = HashMap::new();

        for input in inputs {
            let Some(neighbors) = graph.neighbors(input) else {
                continue;
            };
            for (candidate, &count) in neighbors {
                if input_set.contains(candidate) {
                    continue;
                }
                *scores.entry(candidate).or_insert(0) += count;
            }
        }

        let mut ranked: Vec<ScoredItem> = scores
            .into_iter()
            .map(|(item, count)| ScoredItem::new(item.clone(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
        ranked.truncate(config.limit);
        ranked
    }
}
