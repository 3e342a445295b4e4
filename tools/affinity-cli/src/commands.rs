//! Command implementations.

use std::path::Path;

use tracing::info;

use affinity_core::{Catalog, Category, Item};
use affinity_graph::projection::FrequencyProjection;
use affinity_graph::query::{
    CategorySubgraph, Recommendation, RecommendationConfig, TopNeighbors, TopNeighborsConfig,
    TopPairs, TopPairsConfig,
};
use affinity_graph::store::CoPurchaseGraph;

use crate::error::{CliError, Result};
use crate::ingest;
use crate::output::{self, InfoRow};
use crate::OutputFormat;

/// The loaded analysis state every command runs against.
pub struct Workspace {
    /// The aggregated co-purchase graph.
    pub graph: CoPurchaseGraph,
    /// Optional item-to-category catalog.
    pub catalog: Option<Catalog>,
    /// Number of transactions ingested.
    pub transaction_count: usize,
}

impl Workspace {
    /// Load transactions (and optionally a catalog) and build the graph.
    pub fn load(transactions: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let path = transactions.ok_or(CliError::NoTransactionsSpecified)?;
        let transactions = ingest::load_transactions(path)?;
        let graph = ingest::build_graph(&transactions);
        let catalog = catalog.map(|path| ingest::load_catalog(path)).transpose()?;
        Ok(Self { graph, catalog, transaction_count: transactions.len() })
    }

    fn catalog(&self) -> Result<&Catalog> {
        self.catalog.as_ref().ok_or(CliError::NoCatalogSpecified)
    }
}

/// Show the items most frequently co-purchased with a target item.
pub fn top(workspace: &Workspace, item: &str, limit: usize, format: OutputFormat) -> Result<()> {
    let config = TopNeighborsConfig::new().with_limit(limit);
    let result = TopNeighbors::compute(&workspace.graph, &Item::new(item), &config);
    println!("{}", output::format_scored_items(&result, "Co-purchases", format)?);
    Ok(())
}

/// Show the most popular item combinations.
pub fn pairs(workspace: &Workspace, limit: usize, format: OutputFormat) -> Result<()> {
    let config = TopPairsConfig::new().with_limit(limit);
    let result = TopPairs::compute(&workspace.graph, &config);
    println!("{}", output::format_scored_pairs(&result, format)?);
    Ok(())
}

/// Show the co-purchase count between two items.
pub fn relation(
    workspace: &Workspace,
    first: &str,
    second: &str,
    format: OutputFormat,
) -> Result<()> {
    let count = workspace.graph.relation(&Item::new(first), &Item::new(second));
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "first": first, "second": second, "count": count });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ if count > 0 => {
            println!("'{first}' and '{second}' were co-purchased {count} time(s)");
        }
        _ => println!("no co-purchase relationship between '{first}' and '{second}'"),
    }
    Ok(())
}

/// Show the co-purchase relationships within one category.
pub fn category(workspace: &Workspace, name: &str, format: OutputFormat) -> Result<()> {
    let catalog = workspace.catalog()?;
    let subgraph = CategorySubgraph::compute(&workspace.graph, catalog, &Category::new(name));
    if !subgraph.category_known() {
        println!("unknown category: {name}");
        return Ok(());
    }
    println!("{}", output::format_subgraph(&subgraph, format)?);
    Ok(())
}

/// Recommend items against a set of input items.
pub fn recommend(
    workspace: &Workspace,
    items: &[String],
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let inputs: Vec<Item> = items
        .iter()
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(Item::new)
        .collect();
    if inputs.is_empty() {
        return Err(CliError::InvalidInput("no input items given".to_owned()));
    }
    let config = RecommendationConfig::new().with_limit(limit);
    let result = Recommendation::compute(&workspace.graph, &inputs, &config);
    println!("{}", output::format_scored_items(&result, "Score", format)?);
    Ok(())
}

/// Export the frequency projection as JSON for external rendering.
pub fn export(workspace: &Workspace, top_n: usize, target: Option<&Path>) -> Result<()> {
    let projection = FrequencyProjection::top_n(&workspace.graph, top_n);
    let json = serde_json::to_string_pretty(&projection)?;
    match target {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), nodes = projection.nodes().len(), "wrote projection");
            println!(
                "Exported projection of {} item(s) and {} edge(s) to {}",
                projection.nodes().len(),
                projection.edges().len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Show aggregate statistics.
pub fn show_info(workspace: &Workspace, format: OutputFormat) -> Result<()> {
    let mut rows = vec![
        InfoRow::new("Transactions", workspace.transaction_count.to_string()),
        InfoRow::new("Items", workspace.graph.item_count().to_string()),
        InfoRow::new("Item pairs", workspace.graph.pair_count().to_string()),
    ];
    if let Some(top) = workspace.graph.top_items_by_frequency(1).first() {
        rows.push(InfoRow::new(
            "Most purchased",
            format!("{} ({} transactions)", top.item, top.count),
        ));
    }
    if let Some(catalog) = &workspace.catalog {
        rows.push(InfoRow::new("Cataloged items", catalog.len().to_string()));
    }
    println!("{}", output::format_info(&rows, format)?);
    Ok(())
}
