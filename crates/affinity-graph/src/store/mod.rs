//! Co-purchase graph storage.
//!
//! The aggregate is stored as an adjacency mapping with two symmetric
//! directed entries per relationship: `adjacency[a][b]` and `adjacency[b][a]`
//! always carry the same count. This doubles storage but gives O(1) neighbor
//! lookup from either endpoint. Symmetry is maintained by construction on
//! every write, never reconstructed on read; [`CoPurchaseGraph::validate`]
//! can audit it after the fact.

mod error;
mod graph;

#[cfg(test)]
mod proptest_tests;

pub use error::{GraphError, GraphResult};
pub use graph::CoPurchaseGraph;
