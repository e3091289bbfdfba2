mod causal_error;
mod oracle_error;

pub use causal_error::CausalError;
pub use oracle_error::OracleError;

/// Top-level error for every fallible Chronos operation.
#[derive(Debug, thiserror::Error)]
pub enum ChronosError {
    #[error("causal graph error: {0}")]
    Causal(#[from] CausalError),

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("era not found: {era}")]
    EraNotFound { era: String },

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for ChronosError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

pub type ChronosResult<T> = Result<T, ChronosError>;
