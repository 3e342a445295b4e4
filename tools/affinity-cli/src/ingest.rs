//! Transaction and catalog ingestion.
//!
//! The graph core consumes already-parsed, deduplicated baskets; this module
//! is the collaborator that produces them. Rows sharing a member number and
//! calendar date merge into one transaction, and a repeated item within a
//! receipt is dropped at the [`Transaction`] boundary.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use affinity_core::{Catalog, Item, Transaction};
use affinity_graph::store::CoPurchaseGraph;

use crate::error::{CliError, Result};

/// One row of the transaction CSV export.
#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(rename = "Member_number")]
    member: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "itemDescription")]
    item: String,
}

/// Load transactions from a CSV file.
///
/// Rows are merged by `(member, date)`: the same member shopping on the same
/// day counts as one transaction. Item names are trimmed; duplicates within
/// a transaction are dropped.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        return Err(CliError::TransactionsNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = 0usize;
    let mut merged: HashMap<(String, String), Transaction> = HashMap::new();
    for result in reader.deserialize() {
        let row: TransactionRow = result?;
        rows += 1;
        merged
            .entry((row.member, row.date))
            .or_default()
            .push(Item::new(row.item.trim()));
    }

    let transactions: Vec<Transaction> = merged.into_values().collect();
    info!(rows, transactions = transactions.len(), path = %path.display(), "loaded transaction data");
    Ok(transactions)
}

/// Load an item-to-category catalog from a JSON object file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CliError::CatalogNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let catalog: Catalog = serde_json::from_reader(file)?;
    info!(items = catalog.len(), path = %path.display(), "loaded catalog");
    Ok(catalog)
}

/// Aggregate transactions into a co-purchase graph.
pub fn build_graph(transactions: &[Transaction]) -> CoPurchaseGraph {
    let mut graph = CoPurchaseGraph::new();
    for tx in transactions {
        graph.add_transaction(tx.items());
    }
    info!(
        items = graph.item_count(),
        pairs = graph.pair_count(),
        "aggregated transactions into graph"
    );
    graph
}
