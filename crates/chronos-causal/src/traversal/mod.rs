//! Graph queries: shortest causal path and forward reachability.

pub mod path;
pub mod reachability;

/// Configuration for reachability traversal.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Maximum traversal depth.
    pub max_depth: usize,
    /// Minimum link magnitude to follow.
    pub min_magnitude: f64,
    /// Maximum anchors to return.
    pub max_nodes: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            min_magnitude: 0.0,
            max_nodes: 64,
        }
    }
}

/// An anchor reached during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalNode {
    pub anchor_id: String,
    pub era: String,
    pub depth: usize,
    /// Product of link magnitudes along the discovery path.
    pub path_strength: f64,
}

/// Result of a traversal.
#[derive(Debug, Clone)]
pub struct TraversalResult {
    /// The starting anchor.
    pub origin_id: String,
    /// Anchors discovered, in BFS order. The origin is not included.
    pub nodes: Vec<TraversalNode>,
    /// Maximum depth actually reached.
    pub max_depth_reached: usize,
}
