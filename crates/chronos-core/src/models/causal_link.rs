use serde::{Deserialize, Serialize};

/// Direction of a causal influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectPolarity {
    Positive,
    Negative,
    Neutral,
}

/// Directed edge between two anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalLink {
    pub source_id: String,
    pub target_id: String,
    pub polarity: EffectPolarity,
    /// Strength of the influence, 0.0–1.0.
    pub magnitude: f64,
    pub description: String,
}

impl CausalLink {
    /// Build a link. Magnitude is clamped into `[0, 1]`.
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        polarity: EffectPolarity,
        magnitude: f64,
        description: impl Into<String>,
    ) -> Self {
        let magnitude = if magnitude.is_finite() {
            magnitude.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            polarity,
            magnitude,
            description: description.into(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.polarity == EffectPolarity::Negative
    }
}
