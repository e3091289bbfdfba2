//! Paradox risk limiter.
//!
//! A bounded accumulator plus a three-state threshold machine. The
//! accumulator is nudged on every check and decays only after safe actions,
//! so a run of risky commands keeps pressure on the timeline.

use chronos_core::config::GuardrailConfig;
use chronos_core::constants::MAX_BUTTERFLY_INDEX;
use serde::{Deserialize, Serialize};

const GRIDLOCK_MESSAGE: &str = "AGENTIC GRIDLOCK: Paradox risk exceeds the safe threshold. \
     The Temporal Logic Engine has halted this action to prevent causal collapse. \
     Try a less destructive approach.";
const GRIDLOCK_SUGGESTION: &str =
    "Consider observing the timeline or making a smaller change first.";
const WARNING_MESSAGE: &str = "HIGH PARADOX RISK: Proceeding, but the timeline is under strain. \
     Further high-risk actions may trigger gridlock.";
const WARNING_SUGGESTION: &str =
    "Stabilize the timeline by making a protective action in a connected era.";
const SAFE_MESSAGE: &str = "Paradox risk within acceptable limits.";

/// Outcome class of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimiterStatus {
    Safe,
    Warning,
    Gridlock,
}

impl LimiterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Gridlock => "gridlock",
        }
    }
}

/// Result of [`ParadoxLimiter::check_paradox_risk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimiterDecision {
    pub allowed: bool,
    pub status: LimiterStatus,
    /// Weighted risk, rounded to 3 decimal places.
    pub combined_risk: f64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Total gridlocks so far. Only present on a gridlock decision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridlock_count: Option<u32>,
}

/// Point-in-time view of the limiter's counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimiterSnapshot {
    pub paradox_accumulator: f64,
    pub gridlock_count: u32,
    pub actions_since_gridlock: u32,
    pub current_threshold: f64,
}

/// Stateful gate over combined paradox risk.
///
/// Not internally synchronized: the owner serializes access, so that the
/// pre- and post-checks of one action never interleave with another's.
#[derive(Debug, Clone)]
pub struct ParadoxLimiter {
    config: GuardrailConfig,
    accumulator: f64,
    gridlock_count: u32,
    actions_since_gridlock: u32,
}

impl Default for ParadoxLimiter {
    fn default() -> Self {
        Self::new(GuardrailConfig::default())
    }
}

impl ParadoxLimiter {
    pub fn new(config: GuardrailConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            gridlock_count: 0,
            actions_since_gridlock: 0,
        }
    }

    /// Gate a proposed action.
    ///
    /// `proposed_risk` is clamped to [0,1] and `butterfly_index` to [0,100]
    /// (non-finite values count as 0). The accumulator nudge happens before
    /// the threshold branches and is kept even when the action is refused.
    pub fn check_paradox_risk(
        &mut self,
        proposed_risk: f64,
        butterfly_index: f64,
    ) -> LimiterDecision {
        let risk = clamp_unit(proposed_risk);
        let index = clamp_finite(butterfly_index, 0.0, MAX_BUTTERFLY_INDEX);

        let combined = (risk * self.config.risk_weight
            + (index / MAX_BUTTERFLY_INDEX) * self.config.index_weight)
            .clamp(0.0, 1.0);

        self.accumulator = (self.accumulator + risk * self.config.accumulation_rate).min(1.0);

        if combined >= self.config.gridlock_threshold {
            self.gridlock_count += 1;
            self.actions_since_gridlock = 0;
            tracing::debug!(
                combined,
                gridlock_count = self.gridlock_count,
                "paradox limiter: gridlock"
            );
            LimiterDecision {
                allowed: false,
                status: LimiterStatus::Gridlock,
                combined_risk: round3(combined),
                message: GRIDLOCK_MESSAGE.to_string(),
                suggestion: Some(GRIDLOCK_SUGGESTION.to_string()),
                gridlock_count: Some(self.gridlock_count),
            }
        } else if combined >= self.config.warning_threshold {
            tracing::debug!(combined, "paradox limiter: warning");
            LimiterDecision {
                allowed: true,
                status: LimiterStatus::Warning,
                combined_risk: round3(combined),
                message: WARNING_MESSAGE.to_string(),
                suggestion: Some(WARNING_SUGGESTION.to_string()),
                gridlock_count: None,
            }
        } else {
            self.actions_since_gridlock += 1;
            self.accumulator = (self.accumulator - self.config.cooldown_rate).max(0.0);
            LimiterDecision {
                allowed: true,
                status: LimiterStatus::Safe,
                combined_risk: round3(combined),
                message: SAFE_MESSAGE.to_string(),
                suggestion: None,
                gridlock_count: None,
            }
        }
    }

    pub fn get_status(&self) -> LimiterSnapshot {
        LimiterSnapshot {
            paradox_accumulator: round3(self.accumulator),
            gridlock_count: self.gridlock_count,
            actions_since_gridlock: self.actions_since_gridlock,
            current_threshold: self.config.gridlock_threshold,
        }
    }

    /// Unrounded accumulator value.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn config(&self) -> &GuardrailConfig {
        &self.config
    }
}

fn clamp_unit(value: f64) -> f64 {
    clamp_finite(value, 0.0, 1.0)
}

fn clamp_finite(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        lo
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
