//! CausalGraphStore: anchors, links, and branches behind one query surface.

use chrono::{DateTime, Utc};
use chronos_core::errors::CausalError;
use chronos_core::models::{Anchor, CausalLink, TimelineBranch};
use tracing::warn;

use crate::graph::{cycles, seed, IndexedGraph};
use crate::traversal::{path, reachability, TraversalConfig, TraversalResult};

/// Owns the timeline graph and its branches.
#[derive(Debug, Clone, Default)]
pub struct CausalGraphStore {
    graph: IndexedGraph,
    branches: Vec<TimelineBranch>,
}

impl CausalGraphStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the canonical eight-era timeline.
    pub fn seeded(created_at: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        for anchor in seed::canonical_anchors(created_at) {
            if let Err(e) = store.add_anchor(anchor) {
                warn!(error = %e, "skipping seed anchor");
            }
        }
        for link in seed::canonical_links() {
            if let Err(e) = store.add_link(link) {
                warn!(error = %e, "skipping seed link");
            }
        }
        for branch in seed::canonical_branches() {
            store.add_branch(branch);
        }
        store
    }

    // --- Mutation ---

    pub fn add_anchor(&mut self, anchor: Anchor) -> Result<(), CausalError> {
        self.graph.add_anchor(anchor).map(|_| ())
    }

    /// Add a link. Cycles are allowed but reported.
    pub fn add_link(&mut self, link: CausalLink) -> Result<(), CausalError> {
        if let (Some(source), Some(target)) = (
            self.graph.get_node(&link.source_id),
            self.graph.get_node(&link.target_id),
        ) {
            if cycles::would_create_cycle(&self.graph, source, target) {
                warn!(
                    source = %link.source_id,
                    target = %link.target_id,
                    "causal link closes a cycle"
                );
            }
        }
        self.graph.add_link(link).map(|_| ())
    }

    pub fn add_branch(&mut self, branch: TimelineBranch) {
        self.branches.push(branch);
    }

    pub fn anchor_mut(&mut self, anchor_id: &str) -> Option<&mut Anchor> {
        self.graph.anchor_mut(anchor_id)
    }

    // --- Lookups ---

    pub fn graph(&self) -> &IndexedGraph {
        &self.graph
    }

    pub fn anchor(&self, anchor_id: &str) -> Option<&Anchor> {
        self.graph.anchor(anchor_id)
    }

    /// All anchors in insertion order.
    pub fn anchors(&self) -> Vec<&Anchor> {
        self.graph.anchors().collect()
    }

    /// All links in insertion order.
    pub fn links(&self) -> Vec<&CausalLink> {
        self.graph.links().collect()
    }

    /// All branches in insertion order.
    pub fn branches(&self) -> &[TimelineBranch] {
        &self.branches
    }

    /// Ids of every anchor placed in `era`, in insertion order.
    pub fn anchors_for_era(&self, era: &str) -> Vec<String> {
        self.graph
            .anchors()
            .filter(|a| a.era == era)
            .map(|a| a.id.clone())
            .collect()
    }

    /// The representative anchor of an era: lowest year, then smallest id.
    pub fn resolve_era(&self, era: &str) -> Option<&Anchor> {
        self.graph
            .anchors()
            .filter(|a| a.era == era)
            .min_by(|a, b| a.year.cmp(&b.year).then_with(|| a.id.cmp(&b.id)))
    }

    /// Links leaving an anchor, in insertion order. Empty for unknown ids.
    pub fn outgoing_links(&self, anchor_id: &str) -> Vec<&CausalLink> {
        match self.graph.get_node(anchor_id) {
            Some(idx) => self
                .graph
                .successors(idx)
                .into_iter()
                .map(|(_, link)| link)
                .collect(),
            None => Vec::new(),
        }
    }

    /// First branch flagged primary, in insertion order.
    pub fn primary_branch(&self) -> Option<&TimelineBranch> {
        let mut primaries = self.branches.iter().filter(|b| b.is_primary);
        let first = primaries.next();
        if primaries.next().is_some() {
            warn!("multiple primary branches; using the first");
        }
        first
    }

    // --- Queries ---

    /// Shortest causal path by edge count. See [`path::find_path`].
    pub fn find_path(&self, source_id: &str, target_id: &str) -> Vec<String> {
        path::find_path(&self.graph, source_id, target_id)
    }

    /// Path-local paradox estimate. See [`path::path_paradox_risk`].
    pub fn path_paradox_risk(&self, path: &[String]) -> f64 {
        path::path_paradox_risk(&self.graph, path)
    }

    /// Every anchor reachable from `anchor_id` along outgoing links.
    pub fn reachable(&self, anchor_id: &str, config: &TraversalConfig) -> TraversalResult {
        reachability::trace(&self.graph, anchor_id, config)
    }

    /// Cycles currently present, as sorted anchor-id groups.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        cycles::find_cycles(&self.graph)
    }
}
