//! Layered configuration loaded from TOML. Every section falls back to
//! `defaults` for fields it does not name.

pub mod defaults;
pub mod engine_config;
pub mod guardrail_config;
pub mod observability_config;
pub mod oracle_config;

pub use engine_config::EngineConfig;
pub use guardrail_config::GuardrailConfig;
pub use observability_config::ObservabilityConfig;
pub use oracle_config::OracleConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronosConfig {
    pub engine: EngineConfig,
    pub guardrails: GuardrailConfig,
    pub oracle: OracleConfig,
    pub observability: ObservabilityConfig,
}

impl ChronosConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
