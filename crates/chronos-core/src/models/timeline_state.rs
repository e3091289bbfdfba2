use serde::{Deserialize, Serialize};

use super::{Anchor, TimelineBranch};

/// Read-only snapshot of the whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    pub anchors: Vec<Anchor>,
    pub branches: Vec<TimelineBranch>,
    /// Rounded to one decimal place.
    pub butterfly_index: f64,
    pub active_branch: String,
    pub total_actions: usize,
}
