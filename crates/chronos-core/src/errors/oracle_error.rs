//! Error types for the enhancement oracle path.
//!
//! None of these reach a caller of the engine: every variant is recovered by
//! falling back to the procedural strategy.

/// Failures produced while consulting or validating an enhancement oracle.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// No oracle is configured, or it reported itself unavailable.
    #[error("oracle unavailable: {reason}")]
    Unavailable { reason: String },

    /// The oracle did not answer within the configured budget.
    #[error("oracle timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Network or runtime failure while talking to the oracle.
    #[error("oracle transport error: {reason}")]
    Transport { reason: String },

    /// The oracle answered with something that is not a suggestion.
    #[error("malformed oracle output: {reason}")]
    Malformed { reason: String },

    /// The suggestion parsed but violated a range or shape rule.
    #[error("invalid oracle suggestion field `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}
