//! Affinity Graph
//!
//! This crate aggregates purchase transactions into a weighted undirected
//! graph of co-purchase frequencies and answers analytic queries over it.
//!
//! The graph is an explicitly owned value: callers create a
//! [`CoPurchaseGraph`], feed it transactions, and pass it by reference to the
//! query algorithms. There is no global state, so multiple independent graphs
//! can coexist and tests stay isolated.
//!
//! Writes take `&mut self` and reads take `&self`, which gives the intended
//! discipline under the borrow checker: a transaction's pairwise updates are
//! applied as a unit, and readers never observe them partially. The graph is
//! `Send + Sync`; wrap it in an `RwLock` to share it across threads.
//!
//! # Example
//!
//! ```
//! use affinity_core::Item;
//! use affinity_graph::query::{TopNeighbors, TopNeighborsConfig};
//! use affinity_graph::store::CoPurchaseGraph;
//!
//! let mut graph = CoPurchaseGraph::new();
//! graph.add_transaction(&[Item::new("whole milk"), Item::new("yogurt")]);
//! graph.add_transaction(&[Item::new("whole milk"), Item::new("soda")]);
//!
//! let config = TopNeighborsConfig::default();
//! let top = TopNeighbors::compute(&graph, &Item::new("whole milk"), &config);
//! assert_eq!(top.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`store`] - The mutable aggregate ([`CoPurchaseGraph`]) and its invariant checks
//! - [`query`] - Read-only query algorithms (top neighbors, top pairs, category subgraphs, recommendations)
//! - [`projection`] - Frequency-ranked subgraph export for external rendering

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod projection;
pub mod query;
pub mod store;

pub use store::CoPurchaseGraph;
