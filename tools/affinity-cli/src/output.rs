//! Output formatting utilities.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use affinity_core::{ScoredItem, ScoredPair};
use affinity_graph::projection::FrequencyProjection;
use affinity_graph::query::CategorySubgraph;

use crate::error::Result;
use crate::OutputFormat;

/// Format ranked items (neighbors, recommendations, frequencies).
pub fn format_scored_items(
    rows: &[ScoredItem],
    value_label: &str,
    format: OutputFormat,
) -> Result<String> {
    if rows.is_empty() {
        return empty(format);
    }
    match format {
        OutputFormat::Table => {
            let mut builder = tabled::builder::Builder::new();
            builder.push_record(["Item", value_label]);
            for scored in rows {
                builder.push_record([scored.item.to_string(), scored.count.to_string()]);
            }
            Ok(styled(builder))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Compact => Ok(rows
            .iter()
            .map(|scored| format!("{}={}", scored.item, scored.count))
            .collect::<Vec<_>>()
            .join(", ")),
    }
}

/// Format ranked pairs.
pub fn format_scored_pairs(rows: &[ScoredPair], format: OutputFormat) -> Result<String> {
    if rows.is_empty() {
        return empty(format);
    }
    match format {
        OutputFormat::Table => {
            let mut builder = tabled::builder::Builder::new();
            builder.push_record(["First", "Second", "Co-purchases"]);
            for scored in rows {
                builder.push_record([
                    scored.pair.first().to_string(),
                    scored.pair.second().to_string(),
                    scored.count.to_string(),
                ]);
            }
            Ok(styled(builder))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Compact => Ok(rows
            .iter()
            .map(|scored| format!("{}={}", scored.pair, scored.count))
            .collect::<Vec<_>>()
            .join(", ")),
    }
}

/// Format a category-scoped subgraph.
pub fn format_subgraph(subgraph: &CategorySubgraph, format: OutputFormat) -> Result<String> {
    if subgraph.is_empty() {
        return empty(format);
    }
    match format {
        OutputFormat::Table => {
            let mut builder = tabled::builder::Builder::new();
            builder.push_record(["Item", "Neighbor", "Co-purchases"]);
            for (item, neighbors) in subgraph.adjacency() {
                for (neighbor, count) in neighbors {
                    builder.push_record([item.to_string(), neighbor.to_string(), count.to_string()]);
                }
            }
            Ok(styled(builder))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(subgraph)?),
        OutputFormat::Compact => {
            let entries: Vec<String> = subgraph
                .adjacency()
                .iter()
                .flat_map(|(item, neighbors)| {
                    neighbors
                        .iter()
                        .map(move |(neighbor, count)| format!("{item}+{neighbor}={count}"))
                })
                .collect();
            Ok(entries.join(", "))
        }
    }
}

/// Format a frequency projection.
pub fn format_projection(projection: &FrequencyProjection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(projection)?),
        _ => {
            let nodes = format_scored_items(projection.nodes(), "Frequency", format)?;
            let edges = format_scored_pairs(projection.edges(), format)?;
            Ok(format!("Nodes:\n{nodes}\n\nEdges:\n{edges}"))
        }
    }
}

/// A property/value row for the info command.
#[derive(Debug, Serialize, Tabled)]
pub struct InfoRow {
    /// Property name.
    #[tabled(rename = "Property")]
    pub property: String,
    /// Property value.
    #[tabled(rename = "Value")]
    pub value: String,
}

impl InfoRow {
    /// Create a new info row.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self { property: property.into(), value: value.into() }
    }
}

/// Format info rows.
pub fn format_info(rows: &[InfoRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            Ok(table.to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Compact => Ok(rows
            .iter()
            .map(|row| format!("{}={}", row.property, row.value))
            .collect::<Vec<_>>()
            .join(", ")),
    }
}

fn styled(builder: tabled::builder::Builder) -> String {
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn empty(format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => "[]".to_owned(),
        _ => "(no results)".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use affinity_core::Item;

    use super::*;

    #[test]
    fn compact_items() {
        let rows = vec![ScoredItem::new(Item::new("soda"), 2)];
        let out = format_scored_items(&rows, "Count", OutputFormat::Compact).expect("format");
        assert_eq!(out, "soda=2");
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let out = format_scored_items(&[], "Count", OutputFormat::Table).expect("format");
        assert_eq!(out, "(no results)");
        let out = format_scored_items(&[], "Count", OutputFormat::Json).expect("format");
        assert_eq!(out, "[]");
    }

    #[test]
    fn json_items_round_trip() {
        let rows = vec![ScoredItem::new(Item::new("soda"), 2)];
        let out = format_scored_items(&rows, "Count", OutputFormat::Json).expect("format");
        let back: Vec<ScoredItem> = serde_json::from_str(&out).expect("parse");
        assert_eq!(back, rows);
    }
}
