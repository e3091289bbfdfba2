//! Stateless content classifier over the keyword taxonomy.

use serde::{Deserialize, Serialize};

use crate::taxonomy::KeywordTier;

/// Replacement for any narrative line that fails the safety check.
pub const REDACTION_MARKER: &str =
    "[Narrative redacted by Temporal Ethics Board: content exceeds safety parameters]";

const BLOCKED_MESSAGE: &str = "This action is blocked by Responsible AI guardrails. The temporal \
     engine cannot process commands that would generate harmful narrative content.";
const WARNING_MESSAGE: &str = "Caution: this action triggers moderate narrative sensitivity. \
     The output will be adjusted to remain within ethical bounds.";
const SAFE_MESSAGE: &str = "Content passes safety checks.";

/// Overall verdict level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Warning,
    Blocked,
}

/// One matched keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub keyword: String,
    pub severity: KeywordTier,
}

/// Result of screening one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    pub risk_level: RiskLevel,
    pub violations: Vec<Violation>,
    pub message: String,
}

/// Filters commands and generated narrative against the keyword taxonomy.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrativeSafetyFilter;

impl NarrativeSafetyFilter {
    pub fn new() -> Self {
        Self
    }

    /// Screen `text`.
    ///
    /// High-tier matches block regardless of anything else. Medium-tier terms
    /// are only scanned when nothing blocked, low-tier only when nothing
    /// warned; low-tier matches never change the verdict.
    pub fn check_content(&self, text: &str) -> SafetyVerdict {
        let lowered = text.to_lowercase();

        let mut violations = scan(&lowered, KeywordTier::High);
        let risk_level = if !violations.is_empty() {
            RiskLevel::Blocked
        } else {
            violations = scan(&lowered, KeywordTier::Medium);
            if !violations.is_empty() {
                RiskLevel::Warning
            } else {
                violations = scan(&lowered, KeywordTier::Low);
                RiskLevel::Safe
            }
        };

        SafetyVerdict {
            is_safe: risk_level != RiskLevel::Blocked,
            risk_level,
            violations,
            message: message_for(risk_level).to_string(),
        }
    }

    /// Replace every blocked line with [`REDACTION_MARKER`]. Order and count
    /// are preserved; everything else passes through verbatim.
    pub fn sanitize_narrative(&self, narratives: &[String]) -> Vec<String> {
        narratives
            .iter()
            .map(|line| {
                if self.check_content(line).is_safe {
                    line.clone()
                } else {
                    tracing::debug!(line = %line, "narrative line redacted");
                    REDACTION_MARKER.to_string()
                }
            })
            .collect()
    }
}

fn scan(lowered: &str, tier: KeywordTier) -> Vec<Violation> {
    tier.keywords()
        .iter()
        .filter(|kw| lowered.contains(*kw))
        .map(|kw| Violation {
            keyword: (*kw).to_string(),
            severity: tier,
        })
        .collect()
}

fn message_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Blocked => BLOCKED_MESSAGE,
        RiskLevel::Warning => WARNING_MESSAGE,
        RiskLevel::Safe => SAFE_MESSAGE,
    }
}
