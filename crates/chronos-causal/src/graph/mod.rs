//! Graph storage: the indexed petgraph wrapper, seed data, and cycle diagnostics.

pub mod cycles;
pub mod seed;
pub mod stable_graph;

pub use stable_graph::{IndexedGraph, TimelineGraph};
