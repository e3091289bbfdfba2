//! HTTP enhancement oracle.
//!
//! POSTs the engine context as JSON to a configured endpoint and returns the
//! response body untouched. Validation happens in the engine.

use std::time::Duration;

use chronos_core::config::OracleConfig;
use chronos_core::errors::OracleError;
use chronos_core::traits::{IEnhancementOracle, OracleContext};
use serde::Serialize;
use tracing::debug;

/// Remote oracle reached over HTTP.
pub struct HttpOracle {
    endpoint: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct SuggestRequest<'a> {
    model: &'a str,
    context: &'a OracleContext,
}

impl HttpOracle {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }
}

impl IEnhancementOracle for HttpOracle {
    fn name(&self) -> &str {
        "http"
    }

    fn suggest(&self, context: &OracleContext) -> Result<serde_json::Value, OracleError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OracleError::Transport {
                reason: format!("runtime error: {e}"),
            })?;

        let request = SuggestRequest {
            model: &self.model,
            context,
        };

        rt.block_on(async {
            let client = reqwest::Client::new();
            let response = client
                .post(&self.endpoint)
                .json(&request)
                .timeout(self.timeout)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        OracleError::Timeout {
                            timeout_ms: self.timeout.as_millis() as u64,
                        }
                    } else {
                        OracleError::Transport {
                            reason: format!("HTTP error: {e}"),
                        }
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(OracleError::Unavailable {
                    reason: format!("oracle returned {status}: {body}"),
                });
            }

            let value: serde_json::Value =
                response.json().await.map_err(|e| OracleError::Malformed {
                    reason: format!("response is not JSON: {e}"),
                })?;
            debug!(endpoint = %self.endpoint, "oracle response received");
            Ok(value)
        })
    }
}
