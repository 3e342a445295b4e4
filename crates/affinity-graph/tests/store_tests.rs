//! Integration tests for the co-purchase graph aggregate.
//!
//! These tests verify the aggregation invariants: symmetry of pairwise
//! counts, additivity across repeated ingestion, and the single-item and
//! empty-transaction edge cases.

use affinity_core::{Item, Transaction};
use affinity_graph::store::CoPurchaseGraph;

/// The five-transaction grocery data set used across the query tests.
fn grocery_transactions() -> Vec<Transaction> {
    [
        vec!["whole milk", "other vegetables", "rolls/buns"],
        vec!["whole milk", "yogurt"],
        vec!["other vegetables", "rolls/buns", "soda"],
        vec!["whole milk", "other vegetables"],
        vec!["yogurt", "whole milk", "soda"],
    ]
    .into_iter()
    .map(Transaction::from_items)
    .collect()
}

fn build_graph(transactions: &[Transaction]) -> CoPurchaseGraph {
    let mut graph = CoPurchaseGraph::new();
    for tx in transactions {
        graph.add_transaction(tx.items());
    }
    graph
}

#[test]
fn every_recorded_relation_is_symmetric() {
    let transactions = grocery_transactions();
    let graph = build_graph(&transactions);

    for tx in &transactions {
        for a in tx.items() {
            for b in tx.items() {
                assert_eq!(
                    graph.relation(a, b),
                    graph.relation(b, a),
                    "asymmetry between {a} and {b}"
                );
            }
        }
    }
    graph.validate().expect("invariants hold");
}

#[test]
fn ingesting_everything_twice_doubles_all_counts() {
    let transactions = grocery_transactions();
    let once = build_graph(&transactions);
    let mut twice = build_graph(&transactions);
    for tx in &transactions {
        twice.add_transaction(tx.items());
    }

    for tx in &transactions {
        for a in tx.items() {
            assert_eq!(twice.frequency(a), 2 * once.frequency(a));
            for b in tx.items() {
                if a != b {
                    assert_eq!(twice.relation(a, b), 2 * once.relation(a, b));
                }
            }
        }
    }
    twice.validate().expect("invariants hold after re-ingestion");
}

#[test]
fn single_item_transaction_contributes_frequency_but_no_pairs() {
    let mut graph = build_graph(&grocery_transactions());
    let bread = Item::new("bread");

    graph.add_transaction(std::slice::from_ref(&bread));

    assert_eq!(graph.frequency(&bread), 1);
    assert!(graph.neighbors(&bread).is_none());
    assert_eq!(graph.relation(&bread, &Item::new("whole milk")), 0);
}

#[test]
fn grocery_counts_match_the_transaction_log() {
    let graph = build_graph(&grocery_transactions());

    assert_eq!(graph.frequency(&Item::new("whole milk")), 4);
    assert_eq!(graph.frequency(&Item::new("other vegetables")), 3);
    assert_eq!(graph.frequency(&Item::new("yogurt")), 2);
    assert_eq!(graph.frequency(&Item::new("soda")), 2);
    assert_eq!(graph.frequency(&Item::new("rolls/buns")), 2);

    assert_eq!(graph.relation(&Item::new("whole milk"), &Item::new("soda")), 1);
    assert_eq!(graph.relation(&Item::new("other vegetables"), &Item::new("rolls/buns")), 2);

    assert_eq!(graph.item_count(), 5);
    assert_eq!(graph.pair_count(), 8);
}

#[test]
fn counts_only_ever_increase() {
    let transactions = grocery_transactions();
    let mut graph = CoPurchaseGraph::new();
    let milk = Item::new("whole milk");
    let veg = Item::new("other vegetables");

    let mut last_frequency = 0;
    let mut last_relation = 0;
    for tx in &transactions {
        graph.add_transaction(tx.items());
        let frequency = graph.frequency(&milk);
        let relation = graph.relation(&milk, &veg);
        assert!(frequency >= last_frequency);
        assert!(relation >= last_relation);
        last_frequency = frequency;
        last_relation = relation;
    }
}
