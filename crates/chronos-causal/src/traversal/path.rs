//! Breadth-first causal path search over outgoing links only.

use std::collections::{HashSet, VecDeque};

use chronos_core::constants::NEGATIVE_LINK_RISK_FACTOR;
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;

/// Shortest path by edge count from `source_id` to `target_id`, inclusive.
///
/// Every queue entry owns its path, so branches never share mutable state.
/// Returns an empty vector when either id is unknown or the target is
/// unreachable. Terminates on cyclic graphs.
pub fn find_path(graph: &IndexedGraph, source_id: &str, target_id: &str) -> Vec<String> {
    let (Some(source), Some(target)) = (graph.get_node(source_id), graph.get_node(target_id))
    else {
        return Vec::new();
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<(NodeIndex, Vec<NodeIndex>)> = VecDeque::new();
    queue.push_back((source, vec![source]));

    while let Some((current, path)) = queue.pop_front() {
        if current == target {
            return to_ids(graph, &path);
        }
        if !visited.insert(current) {
            continue;
        }
        for (next, _) in graph.successors(current) {
            if visited.contains(&next) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            queue.push_back((next, extended));
        }
    }

    Vec::new()
}

fn to_ids(graph: &IndexedGraph, path: &[NodeIndex]) -> Vec<String> {
    path.iter()
        .filter_map(|idx| graph.graph.node_weight(*idx).map(|a| a.id.clone()))
        .collect()
}

/// Path-local paradox estimate: `magnitude × 0.3` summed over every negative
/// link whose source lies on the path, capped at 1.0.
///
/// Links leaving the path count too.
pub fn path_paradox_risk(graph: &IndexedGraph, path: &[String]) -> f64 {
    let on_path: HashSet<&str> = path.iter().map(String::as_str).collect();
    let risk: f64 = graph
        .links()
        .filter(|link| link.is_negative() && on_path.contains(link.source_id.as_str()))
        .map(|link| link.magnitude * NEGATIVE_LINK_RISK_FACTOR)
        .sum();
    risk.min(1.0)
}
