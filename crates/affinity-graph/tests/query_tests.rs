//! Integration tests for the query algorithms.
//!
//! These tests run the full grocery scenario end to end: five transactions,
//! then every query with its documented ordering and tie-break behavior.

use affinity_core::{Catalog, Category, Item, ScoredItem, Transaction};
use affinity_graph::projection::FrequencyProjection;
use affinity_graph::query::{
    CategorySubgraph, Recommendation, RecommendationConfig, TopNeighbors, TopNeighborsConfig,
    TopPairs, TopPairsConfig,
};
use affinity_graph::store::CoPurchaseGraph;

fn grocery_graph() -> CoPurchaseGraph {
    let mut graph = CoPurchaseGraph::new();
    for basket in [
        vec!["whole milk", "other vegetables", "rolls/buns"],
        vec!["whole milk", "yogurt"],
        vec!["other vegetables", "rolls/buns", "soda"],
        vec!["whole milk", "other vegetables"],
        vec!["yogurt", "whole milk", "soda"],
    ] {
        let tx = Transaction::from_items(basket);
        graph.add_transaction(tx.items());
    }
    graph
}

fn grocery_catalog() -> Catalog {
    Catalog::from_entries([
        ("whole milk", "dairy"),
        ("yogurt", "dairy"),
        ("other vegetables", "vegetables"),
        ("soda", "drinks"),
        ("rolls/buns", "bakery"),
    ])
    .expect("no conflicts")
}

// ============================================================================
// Top neighbors
// ============================================================================

#[test]
fn top_neighbors_of_whole_milk() {
    let graph = grocery_graph();
    let config = TopNeighborsConfig::new().with_limit(2);
    let result = TopNeighbors::compute(&graph, &Item::new("whole milk"), &config);

    // other vegetables and yogurt tie at 2; lexicographic order decides
    assert_eq!(
        result,
        vec![
            ScoredItem::new(Item::new("other vegetables"), 2),
            ScoredItem::new(Item::new("yogurt"), 2),
        ]
    );
}

#[test]
fn top_neighbors_of_unseen_item_is_empty() {
    let graph = grocery_graph();
    let result = TopNeighbors::compute(&graph, &Item::new("bread"), &TopNeighborsConfig::new());
    assert!(result.is_empty());
}

#[test]
fn top_neighbors_after_single_item_transaction_is_empty() {
    let mut graph = grocery_graph();
    graph.add_transaction(&[Item::new("bread")]);

    assert_eq!(graph.frequency(&Item::new("bread")), 1);
    let result = TopNeighbors::compute(&graph, &Item::new("bread"), &TopNeighborsConfig::new());
    assert!(result.is_empty());
}

// ============================================================================
// Top pairs
// ============================================================================

#[test]
fn top_pairs_ranks_the_three_double_counted_pairs() {
    let graph = grocery_graph();
    let result = TopPairs::compute(&graph, &TopPairsConfig::new());

    let summary: Vec<(String, u64)> =
        result.iter().map(|scored| (scored.pair.to_string(), scored.count)).collect();
    assert_eq!(
        summary,
        vec![
            ("other vegetables + rolls/buns".to_owned(), 2),
            ("other vegetables + whole milk".to_owned(), 2),
            ("whole milk + yogurt".to_owned(), 2),
        ]
    );
}

#[test]
fn top_pairs_is_prefix_consistent_across_limits() {
    let graph = grocery_graph();
    let three = TopPairs::compute(&graph, &TopPairsConfig::new().with_limit(3));
    let five = TopPairs::compute(&graph, &TopPairsConfig::new().with_limit(5));

    assert_eq!(five.len(), 5);
    assert_eq!(&five[..3], &three[..]);
}

#[test]
fn top_pairs_with_limit_beyond_graph_returns_everything() {
    let graph = grocery_graph();
    let result = TopPairs::compute(&graph, &TopPairsConfig::new().with_limit(100));
    assert_eq!(result.len(), 8);
}

// ============================================================================
// Relation lookup
// ============================================================================

#[test]
fn relation_lookup_matches_the_transaction_log() {
    let graph = grocery_graph();
    assert_eq!(graph.relation(&Item::new("whole milk"), &Item::new("soda")), 1);
    assert_eq!(graph.relation(&Item::new("soda"), &Item::new("whole milk")), 1);
    assert_eq!(graph.relation(&Item::new("rolls/buns"), &Item::new("yogurt")), 0);
    assert_eq!(graph.relation(&Item::new("whole milk"), &Item::new("nonexistent")), 0);
}

// ============================================================================
// Category subgraph
// ============================================================================

#[test]
fn dairy_subgraph_keeps_only_dairy_edges() {
    let graph = grocery_graph();
    let subgraph = CategorySubgraph::compute(&graph, &grocery_catalog(), &Category::new("dairy"));

    assert!(subgraph.category_known());
    let retained: Vec<&Item> = subgraph.items().collect();
    assert_eq!(retained, vec![&Item::new("whole milk"), &Item::new("yogurt")]);

    let milk = subgraph.neighbors(&Item::new("whole milk")).expect("whole milk retained");
    assert_eq!(milk.len(), 1);
    assert_eq!(milk.get(&Item::new("yogurt")), Some(&2));
}

#[test]
fn category_subgraph_is_closed_over_the_category() {
    let graph = grocery_graph();
    let catalog = grocery_catalog();
    for category in catalog.categories() {
        let subgraph = CategorySubgraph::compute(&graph, &catalog, &category);
        for item in subgraph.items() {
            assert_eq!(catalog.category_of(item), Some(&category));
            for neighbor in subgraph.neighbors(item).expect("retained").keys() {
                assert_eq!(catalog.category_of(neighbor), Some(&category));
            }
        }
    }
}

#[test]
fn unknown_category_yields_empty_unknown_subgraph() {
    let graph = grocery_graph();
    let subgraph = CategorySubgraph::compute(&graph, &grocery_catalog(), &Category::new("meat"));
    assert!(subgraph.is_empty());
    assert!(!subgraph.category_known());
}

#[test]
fn single_member_category_has_no_edges_but_is_known() {
    let graph = grocery_graph();
    let subgraph =
        CategorySubgraph::compute(&graph, &grocery_catalog(), &Category::new("drinks"));
    assert!(subgraph.is_empty());
    assert!(subgraph.category_known());
}

// ============================================================================
// Recommendations
// ============================================================================

#[test]
fn recommendation_for_milk_and_yogurt() {
    let graph = grocery_graph();
    let inputs = [Item::new("whole milk"), Item::new("yogurt")];
    let config = RecommendationConfig::new().with_limit(1);
    let result = Recommendation::compute(&graph, &inputs, &config);

    // soda also accumulates 1 + 1 = 2, but "other vegetables" wins the
    // lexicographic tie-break
    assert_eq!(result, vec![ScoredItem::new(Item::new("other vegetables"), 2)]);
}

#[test]
fn recommendation_excludes_all_inputs() {
    let graph = grocery_graph();
    let inputs = [Item::new("whole milk"), Item::new("yogurt")];
    let result = Recommendation::compute(&graph, &inputs, &RecommendationConfig::new());

    assert!(!result.is_empty());
    for scored in &result {
        assert!(!inputs.contains(&scored.item));
    }
}

#[test]
fn recommendation_with_empty_inputs_is_empty() {
    let graph = grocery_graph();
    let result = Recommendation::compute(&graph, &[], &RecommendationConfig::new());
    assert!(result.is_empty());
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn projection_restricts_edges_to_top_items() {
    let graph = grocery_graph();
    let projection = FrequencyProjection::top_n(&graph, 3);

    // whole milk (4), other vegetables (3), then the 2-frequency tie
    // resolved lexicographically: rolls/buns
    let names: Vec<&str> =
        projection.nodes().iter().map(|scored| scored.item.as_str()).collect();
    assert_eq!(names, vec!["whole milk", "other vegetables", "rolls/buns"]);

    for edge in projection.edges() {
        assert!(names.contains(&edge.pair.first().as_str()));
        assert!(names.contains(&edge.pair.second().as_str()));
    }
    // milk+yogurt (count 2) is excluded: yogurt is outside the projection
    assert!(projection
        .edges()
        .iter()
        .all(|edge| !edge.pair.contains(&Item::new("yogurt"))));
}
