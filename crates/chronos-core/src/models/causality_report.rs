use serde::{Deserialize, Serialize};

/// Answer to "is there a causal chain from era A to era B?".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalityReport {
    pub valid: bool,
    /// Anchor ids from source to target, inclusive. Empty when unreachable.
    pub path: Vec<String>,
    pub paradox_risk: f64,
    pub chain_length: usize,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CausalityReport {
    /// Report for an era that has no anchor.
    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            valid: false,
            path: Vec::new(),
            paradox_risk: 0.0,
            chain_length: 0,
            description: reason.clone(),
            reason: Some(reason),
        }
    }
}
