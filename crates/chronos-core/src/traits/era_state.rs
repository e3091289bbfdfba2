use std::collections::BTreeMap;

use crate::errors::ChronosResult;
use crate::models::{EraChangeSummary, EraDelta, EraWorldState};

/// Per-era descriptive state, kept outside the causality engine.
///
/// Implementations own clamping of world attributes; the engine only
/// produces delta payloads.
pub trait IEraStateStore: Send + Sync {
    /// Apply one delta. Returns the change lines, empty if nothing moved.
    fn apply_delta(&self, era: &str, delta: &EraDelta) -> ChronosResult<Vec<String>>;

    /// Current state of an era, if known.
    fn get_state(&self, era: &str) -> Option<EraWorldState>;

    /// Apply a whole butterfly delta map. Unknown eras are skipped.
    fn apply_all(&self, deltas: &BTreeMap<String, EraDelta>) -> EraChangeSummary {
        let mut summary = EraChangeSummary::default();
        for (era, delta) in deltas {
            match self.apply_delta(era, delta) {
                Ok(lines) if !lines.is_empty() => {
                    summary.applied_changes.insert(era.clone(), lines);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(era = %era, error = %e, "skipping era delta");
                }
            }
        }
        summary.total_eras_affected = summary.applied_changes.len();
        summary
    }
}
