use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive state of one era, owned by the era state collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraWorldState {
    pub era: String,
    pub year: i32,
    /// 0–100.
    pub stability: i32,
    /// 0–10.
    pub tech_level: i32,
    pub mood: String,
    pub dominant_faction: String,
}

/// What a batch of deltas actually changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EraChangeSummary {
    /// Era name → human-readable change lines.
    pub applied_changes: BTreeMap<String, Vec<String>>,
    pub total_eras_affected: usize,
}
