//! Property tests for path search and reachability on random graphs,
//! cycles included.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use chronos_causal::{CausalGraphStore, TraversalConfig};
use chronos_core::models::{Anchor, CausalLink, EffectPolarity};

/// Build a random graph with `n` anchors. Edges may form cycles.
fn build_random_graph(n: usize, edges: &[(usize, usize, f64)]) -> CausalGraphStore {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut store = CausalGraphStore::new();
    for i in 0..n {
        let anchor = Anchor::new(format!("n{i}"), i as i32, format!("Era {i}"), "", "", at);
        store.add_anchor(anchor).unwrap();
    }
    for &(src, tgt, magnitude) in edges {
        if src < n && tgt < n && src != tgt {
            let link = CausalLink::new(
                format!("n{src}"),
                format!("n{tgt}"),
                EffectPolarity::Negative,
                magnitude,
                "",
            );
            store.add_link(link).unwrap();
        }
    }
    store
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, 0.0_f64..1.0_f64), 0..n * 3)
}

proptest! {
    #[test]
    fn path_to_self_is_singleton(edges in edge_strategy(12), node in 0_usize..12) {
        let store = build_random_graph(12, &edges);
        let id = format!("n{node}");
        prop_assert_eq!(store.find_path(&id, &id), vec![id.clone()]);
    }

    #[test]
    fn paths_are_simple_and_follow_links(
        edges in edge_strategy(12),
        src in 0_usize..12,
        tgt in 0_usize..12,
    ) {
        let store = build_random_graph(12, &edges);
        let path = store.find_path(&format!("n{src}"), &format!("n{tgt}"));
        if path.is_empty() {
            return Ok(());
        }
        prop_assert_eq!(path.first().unwrap(), &format!("n{src}"));
        prop_assert_eq!(path.last().unwrap(), &format!("n{tgt}"));

        let mut seen = std::collections::HashSet::new();
        for id in &path {
            prop_assert!(seen.insert(id.clone()), "anchor {} repeated", id);
        }
        for pair in path.windows(2) {
            let follows = store
                .outgoing_links(&pair[0])
                .iter()
                .any(|l| l.target_id == pair[1]);
            prop_assert!(follows, "no link {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn path_agrees_with_reachability(
        edges in edge_strategy(10),
        src in 0_usize..10,
        tgt in 0_usize..10,
    ) {
        prop_assume!(src != tgt);
        let store = build_random_graph(10, &edges);
        let config = TraversalConfig { max_depth: 64, min_magnitude: 0.0, max_nodes: 64 };
        let reachable = store
            .reachable(&format!("n{src}"), &config)
            .nodes
            .iter()
            .any(|n| n.anchor_id == format!("n{tgt}"));
        let path = store.find_path(&format!("n{src}"), &format!("n{tgt}"));
        prop_assert_eq!(reachable, !path.is_empty());
    }

    #[test]
    fn path_risk_is_bounded(edges in edge_strategy(10), src in 0_usize..10, tgt in 0_usize..10) {
        let store = build_random_graph(10, &edges);
        let path = store.find_path(&format!("n{src}"), &format!("n{tgt}"));
        let risk = store.path_paradox_risk(&path);
        prop_assert!((0.0..=1.0).contains(&risk));
    }
}
