//! Forward traversal: "what can this anchor influence?" Follows outgoing links.

use std::collections::{HashSet, VecDeque};

use crate::graph::IndexedGraph;

use super::{TraversalConfig, TraversalNode, TraversalResult};

/// Trace forward from an anchor to every anchor it can reach.
pub fn trace(graph: &IndexedGraph, anchor_id: &str, config: &TraversalConfig) -> TraversalResult {
    let mut result = TraversalResult {
        origin_id: anchor_id.to_string(),
        nodes: Vec::new(),
        max_depth_reached: 0,
    };

    let start_idx = match graph.get_node(anchor_id) {
        Some(idx) => idx,
        None => return result,
    };

    let mut visited = HashSet::new();
    visited.insert(start_idx);

    let mut queue = VecDeque::new();
    queue.push_back((start_idx, 0, 1.0_f64));

    while let Some((current, depth, path_strength)) = queue.pop_front() {
        if depth >= config.max_depth || result.nodes.len() >= config.max_nodes {
            break;
        }

        for (neighbor, link) in graph.successors(current) {
            if result.nodes.len() >= config.max_nodes {
                break;
            }
            if visited.contains(&neighbor) || link.magnitude < config.min_magnitude {
                continue;
            }
            visited.insert(neighbor);

            if let Some(anchor) = graph.graph.node_weight(neighbor) {
                let new_depth = depth + 1;
                let new_strength = path_strength * link.magnitude;
                result.max_depth_reached = result.max_depth_reached.max(new_depth);
                result.nodes.push(TraversalNode {
                    anchor_id: anchor.id.clone(),
                    era: anchor.era.clone(),
                    depth: new_depth,
                    path_strength: new_strength,
                });
                queue.push_back((neighbor, new_depth, new_strength));
            }
        }
    }

    result
}
