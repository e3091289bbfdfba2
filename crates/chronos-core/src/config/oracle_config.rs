use serde::{Deserialize, Serialize};

use super::defaults;

/// Enhancement oracle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Whether the engine should consult an oracle at all.
    pub enabled: bool,
    /// Endpoint for the HTTP oracle.
    pub endpoint: String,
    /// Model name forwarded to the oracle.
    pub model: String,
    /// Hard upper bound on a single oracle call (milliseconds).
    pub timeout_ms: u64,
    /// Largest absolute stability change accepted from an oracle suggestion.
    pub max_stability_change: i32,
    /// Oracle calls allowed to run at once, counting timed-out calls that
    /// have not returned yet. Further calls fail fast. 0 disables the oracle.
    pub max_in_flight: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ORACLE_ENABLED,
            endpoint: defaults::DEFAULT_ORACLE_ENDPOINT.to_string(),
            model: defaults::DEFAULT_ORACLE_MODEL.to_string(),
            timeout_ms: defaults::DEFAULT_ORACLE_TIMEOUT_MS,
            max_stability_change: defaults::DEFAULT_MAX_STABILITY_CHANGE,
            max_in_flight: defaults::DEFAULT_ORACLE_MAX_IN_FLIGHT,
        }
    }
}
