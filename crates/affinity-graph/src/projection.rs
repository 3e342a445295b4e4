//! Frequency-ranked subgraph projection.
//!
//! External renderers size nodes by purchase frequency and weight edges by
//! co-purchase count. This module computes the data they need: the top-N
//! items by frequency together with the relationships internal to that set.
//! Rendering itself stays outside this crate; the projection serializes to
//! JSON for whatever draws it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use affinity_core::{Item, ScoredItem, ScoredPair};

use crate::store::CoPurchaseGraph;

/// Default number of items projected.
pub const DEFAULT_PROJECTION_ITEMS: usize = 10;

/// A renderable slice of the graph: high-frequency items and their mutual
/// relationships.
///
/// # Example
///
/// ```
/// use affinity_core::Item;
/// use affinity_graph::projection::FrequencyProjection;
/// use affinity_graph::store::CoPurchaseGraph;
///
/// let mut graph = CoPurchaseGraph::new();
/// graph.add_transaction(&[Item::new("milk"), Item::new("veg")]);
/// graph.add_transaction(&[Item::new("milk"), Item::new("soda")]);
///
/// let projection = FrequencyProjection::top_n(&graph, 2);
/// assert_eq!(projection.nodes().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyProjection {
    nodes: Vec<ScoredItem>,
    edges: Vec<ScoredPair>,
}

impl FrequencyProjection {
    /// Project the `n` most frequent items and the edges between them.
    ///
    /// Nodes carry purchase frequency and are ordered by frequency
    /// descending (ties by ascending item order). Edges carry co-purchase
    /// counts and include only relationships with both endpoints in the
    /// node set, ordered by count descending with the same tie-break.
    #[must_use]
    pub fn top_n(graph: &CoPurchaseGraph, n: usize) -> Self {
        let nodes = graph.top_items_by_frequency(n);
        let node_set: HashSet<&Item> = nodes.iter().map(|scored| &scored.item).collect();

        let mut edges: Vec<ScoredPair> = graph
            .pairs()
            .filter(|scored| {
                node_set.contains(scored.pair.first()) && node_set.contains(scored.pair.second())
            })
            .collect();
        edges.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pair.cmp(&b.pair)));

        Self { nodes, edges }
    }

    /// The projected items with their purchase frequencies.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[ScoredItem] {
        &self.nodes
    }

    /// The relationships internal to the projected item set.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[ScoredPair] {
        &self.edges
    }

    /// Whether nothing was projected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
