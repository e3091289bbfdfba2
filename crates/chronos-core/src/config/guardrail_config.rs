use serde::{Deserialize, Serialize};

use super::defaults;

/// Paradox limiter thresholds and weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardrailConfig {
    /// Combined risk at or above which actions are refused.
    pub gridlock_threshold: f64,
    /// Combined risk at or above which actions proceed with a warning.
    pub warning_threshold: f64,
    /// Accumulator decay applied after each safe action.
    pub cooldown_rate: f64,
    /// Fraction of the proposed risk added to the accumulator on every check.
    pub accumulation_rate: f64,
    /// Weight of the proposed risk in the combined score.
    pub risk_weight: f64,
    /// Weight of the normalized butterfly index in the combined score.
    pub index_weight: f64,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            gridlock_threshold: defaults::DEFAULT_GRIDLOCK_THRESHOLD,
            warning_threshold: defaults::DEFAULT_WARNING_THRESHOLD,
            cooldown_rate: defaults::DEFAULT_COOLDOWN_RATE,
            accumulation_rate: defaults::DEFAULT_ACCUMULATION_RATE,
            risk_weight: defaults::DEFAULT_RISK_WEIGHT,
            index_weight: defaults::DEFAULT_INDEX_WEIGHT,
        }
    }
}
