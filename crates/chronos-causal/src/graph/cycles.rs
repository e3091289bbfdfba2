//! Cycle diagnostics. The timeline graph may legally contain cycles; these
//! helpers only report them.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;

use super::stable_graph::{IndexedGraph, TimelineGraph};

/// Whether adding `source → target` would close a cycle.
pub fn would_create_cycle(graph: &IndexedGraph, source: NodeIndex, target: NodeIndex) -> bool {
    if source == target {
        return true;
    }
    has_path(&graph.graph, target, source)
}

/// DFS-based reachability check: can we reach `to` from `from`?
fn has_path(graph: &TimelineGraph, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

/// Strongly connected components with more than one anchor, as anchor ids.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<String>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut ids: Vec<String> = scc
                .into_iter()
                .filter_map(|idx| graph.graph.node_weight(idx).map(|a| a.id.clone()))
                .collect();
            ids.sort();
            ids
        })
        .collect()
}
