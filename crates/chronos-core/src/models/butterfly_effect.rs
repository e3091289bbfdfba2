use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// World-state change proposed for a single era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraDelta {
    pub stability_change: i32,
    /// One of -1, 0, 1. Absent for the triggering era.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_level_shift: Option<i32>,
}

impl EraDelta {
    pub fn stability(stability_change: i32) -> Self {
        Self {
            stability_change,
            tech_level_shift: None,
        }
    }

    pub fn with_tech_shift(stability_change: i32, tech_level_shift: i32) -> Self {
        Self {
            stability_change,
            tech_level_shift: Some(tech_level_shift),
        }
    }
}

/// The computed ripple of a single temporal command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButterflyEffect {
    pub source_action: String,
    /// Affected eras. The first entry is always the triggering era.
    pub affected_eras: Vec<String>,
    /// Paradox risk, 0.0–1.0.
    pub paradox_risk: f64,
    pub narrative_changes: Vec<String>,
    pub world_state_delta: BTreeMap<String, EraDelta>,
}

impl ButterflyEffect {
    /// The era the command was issued in.
    pub fn triggering_era(&self) -> Option<&str> {
        self.affected_eras.first().map(String::as_str)
    }
}

/// Which strategy produced an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSource {
    ProceduralEngine,
    Oracle,
}

impl EffectSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProceduralEngine => "procedural_engine",
            Self::Oracle => "oracle",
        }
    }
}
