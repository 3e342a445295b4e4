//! The co-purchase graph aggregate.

use std::collections::HashMap;

use affinity_core::{Item, ItemPair, ScoredItem, ScoredPair};

use super::error::{GraphError, GraphResult};

/// A weighted undirected graph of co-purchase relationships.
///
/// Nodes are items, edge weights are the number of transactions in which both
/// endpoints appeared. The graph also tracks each item's purchase frequency,
/// counting single-item transactions that never contribute an edge.
///
/// Counts only ever increase: there is no deletion, and the aggregate is
/// rebuilt from the full transaction set on each run rather than persisted.
///
/// # Input contract
///
/// [`add_transaction`](Self::add_transaction) trusts its input to contain
/// each item at most once. A duplicated item inflates the pairwise counts
/// (each occurrence pairs with every other item), exactly as the caller
/// handed it in; deduplicate upstream with
/// [`Transaction`](affinity_core::Transaction).
///
/// # Example
///
/// ```
/// use affinity_core::Item;
/// use affinity_graph::store::CoPurchaseGraph;
///
/// let mut graph = CoPurchaseGraph::new();
/// graph.add_transaction(&[Item::new("whole milk"), Item::new("yogurt")]);
///
/// assert_eq!(graph.frequency(&Item::new("yogurt")), 1);
/// assert_eq!(graph.relation(&Item::new("yogurt"), &Item::new("whole milk")), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoPurchaseGraph {
    /// Symmetric adjacency: both `adjacency[a][b]` and `adjacency[b][a]`
    /// exist and agree for every recorded relationship.
    adjacency: HashMap<Item, HashMap<Item, u64>>,
    /// Transactions in which each item appeared.
    frequency: HashMap<Item, u64>,
}

impl CoPurchaseGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one transaction.
    ///
    /// Every item's frequency is incremented. With two or more items, every
    /// unordered pair drawn from the transaction has its co-purchase count
    /// incremented by one, in both storage directions. A single-item
    /// transaction contributes only frequency; an empty one is a no-op.
    pub fn add_transaction(&mut self, items: &[Item]) {
        for item in items {
            *self.frequency.entry(item.clone()).or_insert(0) += 1;
        }

        if items.len() < 2 {
            return;
        }

        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                let a = &items[i];
                let b = &items[j];
                *self.adjacency.entry(a.clone()).or_default().entry(b.clone()).or_insert(0) += 1;
                *self.adjacency.entry(b.clone()).or_default().entry(a.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Number of transactions in which the item appeared.
    ///
    /// Returns 0 for an item never seen.
    #[must_use]
    pub fn frequency(&self, item: &Item) -> u64 {
        self.frequency.get(item).copied().unwrap_or(0)
    }

    /// Co-purchase count between two items.
    ///
    /// Returns 0 when either item is unknown or no relationship is recorded;
    /// absence is a valid answer, not a fault.
    #[must_use]
    pub fn relation(&self, a: &Item, b: &Item) -> u64 {
        self.adjacency.get(a).and_then(|neighbors| neighbors.get(b)).copied().unwrap_or(0)
    }

    /// The neighbor map of an item, if it has any recorded relationships.
    ///
    /// A zero-count relationship never appears in the map, so `None` and an
    /// empty result both signal "no co-purchases recorded".
    #[must_use]
    pub fn neighbors(&self, item: &Item) -> Option<&HashMap<Item, u64>> {
        self.adjacency.get(item)
    }

    /// Iterate over all items that appeared in at least one transaction.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.frequency.keys()
    }

    /// Number of distinct items seen.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.frequency.len()
    }

    /// Number of distinct item pairs with a recorded relationship.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Whether the graph has seen no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// Iterate over every distinct relationship exactly once.
    ///
    /// The symmetric storage holds each relationship twice; this enumerates
    /// only the canonical direction. Iteration order is unspecified.
    pub fn pairs(&self) -> impl Iterator<Item = ScoredPair> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |&(b, _)| a < b)
                .map(move |(b, &count)| ScoredPair::new(ItemPair::new(a.clone(), b.clone()), count))
        })
    }

    /// The `n` most frequently purchased items.
    ///
    /// Ordered by frequency descending, ties broken by ascending item order.
    #[must_use]
    pub fn top_items_by_frequency(&self, n: usize) -> Vec<ScoredItem> {
        let mut items: Vec<ScoredItem> = self
            .frequency
            .iter()
            .map(|(item, &count)| ScoredItem::new(item.clone(), count))
            .collect();
        items.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));
        items.truncate(n);
        items
    }

    /// Audit the aggregate's invariants.
    ///
    /// Checks that no item is its own neighbor, that both directions of every
    /// relationship exist and agree, and that no co-purchase count exceeds
    /// the frequency of either endpoint. Returns the first violation found.
    pub fn validate(&self) -> GraphResult<()> {
        for (a, neighbors) in &self.adjacency {
            for (b, &count) in neighbors {
                if a == b {
                    return Err(GraphError::SelfLoop(a.clone()));
                }

                if count > self.frequency(a) {
                    return Err(GraphError::CountExceedsFrequency {
                        pair: ItemPair::new(a.clone(), b.clone()),
                        item: a.clone(),
                        count,
                        frequency: self.frequency(a),
                    });
                }

                match self.adjacency.get(b).and_then(|reverse| reverse.get(a)) {
                    None => {
                        return Err(GraphError::MissingReverse {
                            from: a.clone(),
                            to: b.clone(),
                        });
                    }
                    Some(&reverse) if reverse != count && a < b => {
                        return Err(GraphError::AsymmetricCounts {
                            pair: ItemPair::new(a.clone(), b.clone()),
                            forward: count,
                            reverse,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}
