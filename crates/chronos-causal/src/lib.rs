//! # chronos-causal
//!
//! The timeline graph. Anchors are nodes and causal links are directed edges of a
//! `petgraph` stable graph, with branches kept alongside.
//! Answers path, reachability, and era lookups for the engine.

pub mod graph;
pub mod store;
pub mod traversal;

pub use graph::IndexedGraph;
pub use store::CausalGraphStore;
pub use traversal::{TraversalConfig, TraversalNode, TraversalResult};
