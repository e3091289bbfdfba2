//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A temporal command was simulated.
pub fn command_processed(action_id: &str, era: &str, source: &str, risk: f64, index: f64) {
    tracing::info!(
        event = "command_processed",
        action_id = %action_id,
        era = %era,
        source = %source,
        paradox_risk = risk,
        butterfly_index = index,
        "temporal command processed"
    );
}

/// An effect crossed the paradox threshold.
pub fn paradox_triggered(action_id: &str, era: &str, anchor_id: Option<&str>, risk: f64) {
    tracing::warn!(
        event = "paradox_triggered",
        action_id = %action_id,
        era = %era,
        anchor_id = ?anchor_id,
        paradox_risk = risk,
        "paradox threshold crossed"
    );
}

/// A guardrail refused an action.
pub fn action_blocked(stage: &str, reason: &str) {
    tracing::warn!(
        event = "action_blocked",
        stage = %stage,
        reason = %reason,
        "action blocked by guardrails"
    );
}

/// The oracle failed and the procedural path took over.
pub fn oracle_degraded(oracle: &str, failure: &str) {
    tracing::warn!(
        event = "oracle_degraded",
        oracle = %oracle,
        failure = %failure,
        fallback = "procedural_engine",
        "oracle degraded"
    );
}

/// Era world states were updated from an effect's delta.
pub fn world_delta_applied(action_id: &str, eras_affected: usize) {
    tracing::info!(
        event = "world_delta_applied",
        action_id = %action_id,
        eras_affected = eras_affected,
        "world delta applied"
    );
}
