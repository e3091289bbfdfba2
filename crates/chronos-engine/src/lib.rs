//! # chronos-engine
//!
//! The causality engine façade and everything that runs behind it:
//! intent classification, the procedural butterfly-effect calculator, the
//! time-boxed enhancement oracle with validation, the guarded temporal
//! command pipeline, and a reference era world-state store.

pub mod butterfly;
pub mod engine;
pub mod intent;
pub mod oracle;
pub mod pipeline;
pub mod result;
pub mod tracing_setup;
pub mod world;

pub use engine::{CausalityEngine, CausalityEngineBuilder};
pub use intent::IntentBucket;
pub use pipeline::CommandOutcome;
pub use result::CommandResult;
pub use world::InMemoryEraStates;
