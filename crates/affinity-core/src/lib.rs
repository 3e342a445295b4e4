//! Affinity Core
//!
//! This crate provides the shared types for co-purchase affinity analysis:
//! the vocabulary that the graph aggregate, the query algorithms, and the
//! surrounding tooling all speak.
//!
//! # Overview
//!
//! - **Identifiers**: [`Item`] for products, [`Category`] for catalog labels
//! - **Pairs**: [`ItemPair`], the canonical unordered pair of distinct items
//! - **Baskets**: [`Transaction`], a deduplicated purchase event
//! - **Results**: [`ScoredItem`] and [`ScoredPair`] for ranked query output
//! - **Catalog**: [`Catalog`], the immutable item-to-category mapping
//!
//! # Example
//!
//! ```
//! use affinity_core::{Item, ItemPair, Transaction};
//!
//! let basket = Transaction::from_items(["whole milk", "yogurt", "whole milk"]);
//! assert_eq!(basket.len(), 2); // duplicates collapse at the basket boundary
//!
//! let pair = ItemPair::new(Item::new("yogurt"), Item::new("whole milk"));
//! assert_eq!(pair.first().as_str(), "whole milk"); // canonical order
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`Item`], [`ItemPair`], [`Transaction`], scored results)
//! - [`catalog`] - The item-to-category mapping ([`Catalog`])
//! - [`error`] - Error types ([`CatalogError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, Category};
pub use error::CatalogError;
pub use types::{Item, ItemPair, ScoredItem, ScoredPair, Transaction};
