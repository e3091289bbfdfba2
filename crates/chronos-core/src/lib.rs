//! # chronos-core
//!
//! Foundation crate for the Chronos causality engine.
//! Defines the timeline models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ChronosConfig;
pub use errors::{ChronosError, ChronosResult};
pub use models::{
    ActionRecord, Anchor, AnchorStatus, ButterflyEffect, CausalLink, CausalityReport, EraDelta,
    EffectPolarity, TimelineBranch, TimelineState,
};
