//! Read-only query algorithms over the co-purchase graph.
//!
//! Every query here takes the graph by shared reference and never mutates
//! it. Expected absences (unknown item, unknown category) produce empty
//! results rather than errors.
//!
//! # Queries
//!
//! - [`TopNeighbors`] - Most frequent co-purchases of one item
//! - [`TopPairs`] - Most popular item combinations overall
//! - [`CategorySubgraph`] - The graph restricted to one catalog category
//! - [`Recommendation`] - Candidates scored against a set of input items
//!
//! The pairwise relationship lookup needs no algorithm; it is the O(1)
//! accessor [`CoPurchaseGraph::relation`](crate::store::CoPurchaseGraph::relation).
//!
//! # Determinism
//!
//! Every ranked query orders by count descending with ascending lexicographic
//! item (or pair) order as the tie-break, so results are reproducible across
//! runs and reimplementations regardless of hash-map iteration order.

mod category;
mod neighbors;
mod pairs;
mod recommend;

pub use category::CategorySubgraph;
pub use neighbors::{TopNeighbors, TopNeighborsConfig, DEFAULT_NEIGHBOR_LIMIT};
pub use pairs::{TopPairs, TopPairsConfig, DEFAULT_PAIR_LIMIT};
pub use recommend::{Recommendation, RecommendationConfig, DEFAULT_RECOMMENDATION_LIMIT};
