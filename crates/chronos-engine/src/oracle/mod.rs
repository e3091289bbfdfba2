//! Enhancement oracle integration.
//!
//! The oracle runs on a helper thread and is bounded by a hard timeout.
//! Whatever it returns is validated before it may replace the procedural
//! effect; every failure surfaces as an [`OracleError`] for the caller to
//! recover from.

#[cfg(feature = "http-oracle")]
pub mod http;
pub mod validation;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use chronos_core::config::OracleConfig;
use chronos_core::errors::OracleError;
use chronos_core::models::ButterflyEffect;
use chronos_core::traits::{IEnhancementOracle, OracleContext};
use tracing::debug;

#[cfg(feature = "http-oracle")]
pub use http::HttpOracle;
pub use validation::validate_suggestion;

/// Bounds applied to a single oracle call.
#[derive(Debug, Clone, Copy)]
pub struct CallLimits {
    pub timeout: Duration,
    pub max_stability_change: i32,
    pub max_in_flight: usize,
}

impl CallLimits {
    pub fn from_config(config: &OracleConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            max_stability_change: config.max_stability_change,
            max_in_flight: config.max_in_flight,
        }
    }
}

/// One claimed slot of the in-flight budget. Released on drop.
struct InFlightSlot(Arc<AtomicUsize>);

impl InFlightSlot {
    fn acquire(in_flight: &Arc<AtomicUsize>, max: usize) -> Result<Self, OracleError> {
        in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                if n < max {
                    Some(n + 1)
                } else {
                    None
                }
            })
            .map_err(|n| OracleError::Unavailable {
                reason: format!("{n} oracle call(s) still in flight (limit {max})"),
            })?;
        Ok(Self(Arc::clone(in_flight)))
    }
}

impl Drop for InFlightSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Ask `oracle` for a suggestion and validate it, giving up after
/// `limits.timeout`.
///
/// A timed-out call keeps running on its thread and keeps its slot in
/// `in_flight` until it returns; its answer is discarded. When every slot is
/// taken the call fails fast with [`OracleError::Unavailable`].
pub fn consult(
    oracle: &Arc<dyn IEnhancementOracle>,
    context: OracleContext,
    limits: CallLimits,
    in_flight: &Arc<AtomicUsize>,
) -> Result<ButterflyEffect, OracleError> {
    let slot = InFlightSlot::acquire(in_flight, limits.max_in_flight)?;
    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(oracle);
    let command = context.command.clone();
    let era = context.current_era.clone();

    std::thread::Builder::new()
        .name("chronos-oracle".to_string())
        .spawn(move || {
            let _slot = slot;
            let answer = worker.suggest(&context);
            // The receiver may be gone after a timeout.
            let _ = tx.send(answer);
        })
        .map_err(|e| OracleError::Transport {
            reason: format!("failed to spawn oracle thread: {e}"),
        })?;

    let timeout = limits.timeout;
    let raw = match rx.recv_timeout(timeout) {
        Ok(answer) => answer?,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            return Err(OracleError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            return Err(OracleError::Transport {
                reason: "oracle thread exited without answering".to_string(),
            })
        }
    };

    debug!(oracle = %oracle.name(), "oracle answered; validating");
    validate_suggestion(&raw, &command, &era, limits.max_stability_change)
}
