//! Category-scoped subgraphs.

use std::collections::BTreeMap;

use serde::Serialize;

use affinity_core::{Catalog, Category, Item};

use crate::store::CoPurchaseGraph;

/// The co-purchase graph restricted to the items of one catalog category.
///
/// Contains only relationships whose endpoints are both assigned to the
/// category, and only items with at least one such relationship. Ordered
/// maps keep iteration (and serialized output) deterministic.
///
/// An empty subgraph can mean two things: the catalog knows no items in the
/// category, or it does but none of them share a recorded co-purchase.
/// [`category_known`](Self::category_known) distinguishes the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySubgraph {
    category: Category,
    category_known: bool,
    adjacency: BTreeMap<Item, BTreeMap<Item, u64>>,
}

impl CategorySubgraph {
    /// Restrict the graph to the given category.
    ///
    /// Resolves the catalog's item set for the category, then keeps each
    /// graph item's neighbors that are also in that set, including the item
    /// only when at least one neighbor survives. An unknown category yields
    /// an empty subgraph with `category_known` false.
    #[must_use]
    pub fn compute(graph: &CoPurchaseGraph, catalog: &Catalog, category: &Category) -> Self {
        let members = catalog.items_in(category);
        let mut adjacency = BTreeMap::new();

        for item in &members {
            let Some(neighbors) = graph.neighbors(item) else {
                continue;
            };
            let kept: BTreeMap<Item, u64> = neighbors
                .iter()
                .filter(|&(neighbor, _)| members.binary_search(neighbor).is_ok())
                .map(|(neighbor, &count)| (neighbor.clone(), count))
                .collect();
            if !kept.is_empty() {
                adjacency.insert(item.clone(), kept);
            }
        }

        Self {
            category: category.clone(),
            category_known: !members.is_empty(),
            adjacency,
        }
    }

    /// The category this subgraph was scoped to.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Whether the catalog assigns any item to the category at all.
    ///
    /// Distinguishes "unknown category" from "known category whose items
    /// have no co-purchases"; both produce an empty subgraph.
    #[inline]
    #[must_use]
    pub fn category_known(&self) -> bool {
        self.category_known
    }

    /// The restricted adjacency mapping.
    #[inline]
    #[must_use]
    pub fn adjacency(&self) -> &BTreeMap<Item, BTreeMap<Item, u64>> {
        &self.adjacency
    }

    /// Iterate over the items retained in the subgraph.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.adjacency.keys()
    }

    /// The retained neighbors of an item.
    #[must_use]
    pub fn neighbors(&self, item: &Item) -> Option<&BTreeMap<Item, u64>> {
        self.adjacency.get(item)
    }

    /// Number of items retained.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether no item was retained.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
