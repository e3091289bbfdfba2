use serde::{Deserialize, Serialize};

/// An alternate path through the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBranch {
    pub id: String,
    pub name: String,
    /// Anchor id where this branch diverges.
    pub divergence_point: String,
    /// Likelihood of this branch, 0.0–1.0.
    pub probability: f64,
    pub is_primary: bool,
    /// Opaque per-branch payload.
    #[serde(default)]
    pub world_state: serde_json::Value,
}

impl TimelineBranch {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        divergence_point: impl Into<String>,
        probability: f64,
        is_primary: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            divergence_point: divergence_point.into(),
            probability: probability.clamp(0.0, 1.0),
            is_primary,
            world_state: serde_json::Value::Object(Default::default()),
        }
    }
}
