//! Keyword-bucket intent classification and base paradox risk.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SAVE_KEYWORDS: &[&str] = &["save", "protect", "warn", "help", "rescue"];
const DESTROY_KEYWORDS: &[&str] = &["destroy", "kill", "delete", "remove", "stop"];
const CHANGE_KEYWORDS: &[&str] = &["change", "alter", "modify", "move", "travel"];

/// Coarse intent of a temporal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentBucket {
    Save,
    Destroy,
    Change,
    Other,
}

impl IntentBucket {
    /// First match wins, checked in the order save, destroy, change.
    /// Matching is a case-insensitive substring scan.
    pub fn classify(command: &str) -> Self {
        let lowered = command.to_lowercase();
        let hit = |words: &[&str]| words.iter().any(|w| lowered.contains(w));
        if hit(SAVE_KEYWORDS) {
            Self::Save
        } else if hit(DESTROY_KEYWORDS) {
            Self::Destroy
        } else if hit(CHANGE_KEYWORDS) {
            Self::Change
        } else {
            Self::Other
        }
    }

    /// Base offset and jitter range for the bucket's paradox risk.
    pub fn risk_range(&self) -> (f64, f64, f64) {
        match self {
            Self::Destroy => (0.5, 0.1, 0.3),
            Self::Change => (0.3, 0.05, 0.2),
            Self::Save => (0.1, 0.05, 0.15),
            Self::Other => (0.2, 0.0, 0.1),
        }
    }

    /// Draw a base paradox risk: `base + U(lo, hi)`, rounded to 3 places.
    pub fn draw_risk<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (base, lo, hi) = self.risk_range();
        let risk = base + rng.gen_range(lo..hi);
        ((risk * 1000.0).round() / 1000.0).clamp(0.0, 1.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Destroy => "destroy",
            Self::Change => "change",
            Self::Other => "other",
        }
    }
}
