//! Tracing setup: structured JSON or human-readable logs, filtered by `CHRONOS_LOG`.

pub mod events;

use chronos_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "CHRONOS_LOG";

/// Initialize the global subscriber with JSON output at `info`.
///
/// Respects `CHRONOS_LOG`. Panics if a subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize from configuration. `CHRONOS_LOG` still wins over `log_level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Install a subscriber with a custom filter string (for tests or embedding).
///
/// Returns `false` instead of panicking if one is already installed.
pub fn try_init_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
