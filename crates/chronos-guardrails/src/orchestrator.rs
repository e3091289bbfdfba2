//! Guardrail orchestrator: content safety first, paradox limiter second.

use chronos_core::config::GuardrailConfig;
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::limiter::{LimiterDecision, LimiterSnapshot, ParadoxLimiter};
use crate::safety::{NarrativeSafetyFilter, SafetyVerdict};

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    ContentSafety,
    ParadoxGridlock,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentSafety => "content_safety",
            Self::ParadoxGridlock => "paradox_gridlock",
        }
    }
}

/// Verdicts backing a [`GuardrailVerdict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardrailDetails {
    ContentSafety(SafetyVerdict),
    ParadoxGridlock(LimiterDecision),
    Cleared {
        safety: SafetyVerdict,
        paradox: LimiterDecision,
    },
}

impl GuardrailDetails {
    /// The message a player should see for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::ContentSafety(v) => &v.message,
            Self::ParadoxGridlock(d) => &d.message,
            Self::Cleared { paradox, .. } => &paradox.message,
        }
    }

    /// Remediation hint, if the limiter offered one.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::ContentSafety(_) => None,
            Self::ParadoxGridlock(d) | Self::Cleared { paradox: d, .. } => d.suggestion.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardrailVerdict {
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<BlockReason>,
    pub details: GuardrailDetails,
}

/// Runs the safety filter and the paradox limiter in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct GuardrailOrchestrator {
    filter: NarrativeSafetyFilter,
    limiter: ParadoxLimiter,
}

impl GuardrailOrchestrator {
    pub fn new(config: GuardrailConfig) -> Self {
        Self {
            filter: NarrativeSafetyFilter::new(),
            limiter: ParadoxLimiter::new(config),
        }
    }

    /// Screen `command`, then gate on paradox risk.
    ///
    /// An unsafe command short-circuits before the limiter, leaving its
    /// accumulator and counters untouched.
    pub fn evaluate_action(
        &mut self,
        command: &str,
        paradox_risk: f64,
        butterfly_index: f64,
    ) -> GuardrailVerdict {
        let _span = info_span!("chronos.guardrails", paradox_risk, butterfly_index).entered();

        let safety = self.filter.check_content(command);
        if !safety.is_safe {
            return GuardrailVerdict {
                approved: false,
                reason: Some(BlockReason::ContentSafety),
                details: GuardrailDetails::ContentSafety(safety),
            };
        }

        let paradox = self.limiter.check_paradox_risk(paradox_risk, butterfly_index);
        if !paradox.allowed {
            return GuardrailVerdict {
                approved: false,
                reason: Some(BlockReason::ParadoxGridlock),
                details: GuardrailDetails::ParadoxGridlock(paradox),
            };
        }

        GuardrailVerdict {
            approved: true,
            reason: None,
            details: GuardrailDetails::Cleared { safety, paradox },
        }
    }

    pub fn sanitize_output(&self, narratives: &[String]) -> Vec<String> {
        self.filter.sanitize_narrative(narratives)
    }

    pub fn filter(&self) -> &NarrativeSafetyFilter {
        &self.filter
    }

    pub fn limiter(&self) -> &ParadoxLimiter {
        &self.limiter
    }

    pub fn limiter_status(&self) -> LimiterSnapshot {
        self.limiter.get_status()
    }
}
