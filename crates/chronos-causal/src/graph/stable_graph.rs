//! petgraph::StableGraph wrapper keyed by anchor id.

use std::collections::HashMap;

use chronos_core::errors::CausalError;
use chronos_core::models::{Anchor, CausalLink};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

/// The underlying directed graph type.
pub type TimelineGraph = StableGraph<Anchor, CausalLink, Directed>;

/// Wrapper providing indexed access to the timeline graph.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: TimelineGraph,
    /// Map from anchor id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Insert an anchor. Ids are unique.
    pub fn add_anchor(&mut self, anchor: Anchor) -> Result<NodeIndex, CausalError> {
        if self.node_index.contains_key(&anchor.id) {
            return Err(CausalError::DuplicateAnchor { id: anchor.id });
        }
        let id = anchor.id.clone();
        let idx = self.graph.add_node(anchor);
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Insert a link between two existing anchors.
    pub fn add_link(&mut self, link: CausalLink) -> Result<EdgeIndex, CausalError> {
        if link.source_id == link.target_id {
            return Err(CausalError::SelfLoop { id: link.source_id });
        }
        let source = self.require(&link.source_id)?;
        let target = self.require(&link.target_id)?;
        Ok(self.graph.add_edge(source, target, link))
    }

    fn require(&self, anchor_id: &str) -> Result<NodeIndex, CausalError> {
        self.get_node(anchor_id).ok_or_else(|| CausalError::UnknownAnchor {
            id: anchor_id.to_string(),
        })
    }

    /// Look up a node index by anchor id.
    pub fn get_node(&self, anchor_id: &str) -> Option<NodeIndex> {
        self.node_index.get(anchor_id).copied()
    }

    pub fn anchor(&self, anchor_id: &str) -> Option<&Anchor> {
        self.get_node(anchor_id)
            .and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn anchor_mut(&mut self, anchor_id: &str) -> Option<&mut Anchor> {
        let idx = self.get_node(anchor_id)?;
        self.graph.node_weight_mut(idx)
    }

    /// All anchors in insertion order.
    pub fn anchors(&self) -> impl Iterator<Item = &Anchor> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
    }

    /// All links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = &CausalLink> {
        self.graph
            .edge_indices()
            .filter_map(move |idx| self.graph.edge_weight(idx))
    }

    /// Outgoing edges of a node in insertion order, as (target, link) pairs.
    ///
    /// petgraph walks adjacency lists newest-first; sorting by edge index
    /// restores the order links were added in.
    pub fn successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, &CausalLink)> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| (e.target(), e.weight()))
            .collect()
    }

    /// Number of anchors.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
