use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stability of an anchor. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStatus {
    Stable,
    Shifting,
    Paradox,
}

impl AnchorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Shifting => "shifting",
            Self::Paradox => "paradox",
        }
    }
}

impl std::fmt::Display for AnchorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed decision point on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: String,
    pub year: i32,
    pub era: String,
    pub label: String,
    pub description: String,
    pub status: AnchorStatus,
    pub created_at: DateTime<Utc>,
}

impl Anchor {
    pub fn new(
        id: impl Into<String>,
        year: i32,
        era: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            year,
            era: era.into(),
            label: label.into(),
            description: description.into(),
            status: AnchorStatus::Stable,
            created_at,
        }
    }

    pub fn with_status(mut self, status: AnchorStatus) -> Self {
        self.status = status;
        self
    }

    /// Move the status towards `target` if that is more severe.
    /// Returns `true` when the status changed. Status never regresses.
    pub fn escalate(&mut self, target: AnchorStatus) -> bool {
        if target > self.status {
            self.status = target;
            true
        } else {
            false
        }
    }
}
