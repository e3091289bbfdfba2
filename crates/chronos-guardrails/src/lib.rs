//! # chronos-guardrails
//!
//! Admission control for temporal commands.
//! A keyword-taxonomy safety filter screens text, a paradox limiter gates on
//! combined risk, and the orchestrator runs both in a fixed order.

pub mod limiter;
pub mod orchestrator;
pub mod safety;
pub mod taxonomy;

pub use limiter::{LimiterDecision, LimiterSnapshot, LimiterStatus, ParadoxLimiter};
pub use orchestrator::{BlockReason, GuardrailDetails, GuardrailOrchestrator, GuardrailVerdict};
pub use safety::{NarrativeSafetyFilter, RiskLevel, SafetyVerdict, Violation, REDACTION_MARKER};
pub use taxonomy::{KeywordTier, BLOCKED_THEMES};
