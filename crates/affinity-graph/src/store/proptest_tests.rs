//! Property-based tests for the graph invariants.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use affinity_core::Item;

use crate::query::{Recommendation, RecommendationConfig};
use crate::store::CoPurchaseGraph;

/// Strategy for generating arbitrary items from a small alphabet, so that
/// baskets actually overlap and relationships accumulate.
fn arb_item() -> impl Strategy<Value = Item> {
    "[a-f]{1,3}".prop_map(Item::new)
}

/// Strategy for a deduplicated basket of 0 to 5 items.
fn arb_basket() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::btree_set(arb_item(), 0..=5).prop_map(|set| set.into_iter().collect())
}

/// Strategy for a full transaction set.
fn arb_baskets() -> impl Strategy<Value = Vec<Vec<Item>>> {
    prop::collection::vec(arb_basket(), 0..12)
}

fn build(baskets: &[Vec<Item>]) -> CoPurchaseGraph {
    let mut graph = CoPurchaseGraph::new();
    for basket in baskets {
        graph.add_transaction(basket);
    }
    graph
}

proptest! {
    #[test]
    fn invariants_hold_after_any_ingestion(baskets in arb_baskets()) {
        let graph = build(&baskets);
        prop_assert!(graph.validate().is_ok());
    }

    #[test]
    fn relation_is_symmetric(baskets in arb_baskets()) {
        let graph = build(&baskets);
        for basket in &baskets {
            for a in basket {
                for b in basket {
                    prop_assert_eq!(graph.relation(a, b), graph.relation(b, a));
                }
            }
        }
    }

    #[test]
    fn relation_never_exceeds_either_frequency(baskets in arb_baskets()) {
        let graph = build(&baskets);
        for basket in &baskets {
            for a in basket {
                for b in basket {
                    if a != b {
                        let relation = graph.relation(a, b);
                        prop_assert!(relation <= graph.frequency(a));
                        prop_assert!(relation <= graph.frequency(b));
                    }
                }
            }
        }
    }

    #[test]
    fn ingesting_twice_doubles_every_count(baskets in arb_baskets()) {
        let once = build(&baskets);
        let mut twice = build(&baskets);
        for basket in &baskets {
            twice.add_transaction(basket);
        }

        for basket in &baskets {
            for a in basket {
                prop_assert_eq!(twice.frequency(a), 2 * once.frequency(a));
                for b in basket {
                    if a != b {
                        prop_assert_eq!(twice.relation(a, b), 2 * once.relation(a, b));
                    }
                }
            }
        }
    }

    #[test]
    fn recommendations_never_include_inputs(
        baskets in arb_baskets(),
        inputs in prop::collection::vec(arb_item(), 0..4),
    ) {
        let graph = build(&baskets);
        let config = RecommendationConfig::default();
        let recommended = Recommendation::compute(&graph, &inputs, &config);
        for scored in &recommended {
            prop_assert!(!inputs.contains(&scored.item));
        }
    }
}
