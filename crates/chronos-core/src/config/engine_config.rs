use serde::{Deserialize, Serialize};

use super::defaults;

/// Causality engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Butterfly index at process start, 0.0–100.0.
    pub initial_butterfly_index: f64,
    /// Index points added per unit of paradox risk.
    pub index_gain: f64,
    /// Paradox risk above which the triggering anchor flips to `paradox`.
    pub paradox_threshold: f64,
    /// Proposed risk used for the guardrail pre-check, before the effect is known.
    pub pre_check_risk: f64,
    /// How many recent actions are shared with the enhancement oracle.
    pub recent_action_window: usize,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_butterfly_index: defaults::DEFAULT_INITIAL_BUTTERFLY_INDEX,
            index_gain: defaults::DEFAULT_INDEX_GAIN,
            paradox_threshold: defaults::DEFAULT_PARADOX_THRESHOLD,
            pre_check_risk: defaults::DEFAULT_PRE_CHECK_RISK,
            recent_action_window: defaults::DEFAULT_RECENT_ACTION_WINDOW,
            rng_seed: None,
        }
    }
}
