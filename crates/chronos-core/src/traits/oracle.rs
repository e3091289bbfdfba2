use serde::{Deserialize, Serialize};

use crate::errors::OracleError;
use crate::models::{ActionRecord, Anchor};

/// Snapshot of engine state handed to an oracle alongside the command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleContext {
    pub command: String,
    pub current_era: String,
    pub timeline: Vec<Anchor>,
    pub butterfly_index: f64,
    pub recent_actions: Vec<ActionRecord>,
}

/// Optional reasoning backend that proposes a butterfly effect.
///
/// The answer is untyped on purpose: the engine validates field presence,
/// types, and ranges before trusting anything an oracle returns.
///
/// `suggest` must bound its own running time (for example with a request
/// timeout). The engine stops waiting after `oracle.timeout_ms`, but it
/// cannot cancel a call; the thread running it lives until `suggest`
/// returns and holds one of the `oracle.max_in_flight` slots meanwhile.
pub trait IEnhancementOracle: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Propose an effect with the shape
    /// `{affected_eras, paradox_risk, narrative_changes, world_state_delta}`.
    fn suggest(&self, context: &OracleContext) -> Result<serde_json::Value, OracleError>;
}
