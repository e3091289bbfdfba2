//! Keyword tiers for the narrative safety filter.
//!
//! Terms are matched as lowercase substrings. The tiers are disjoint.

use serde::{Deserialize, Serialize};

/// Severity tier of a sensitive keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordTier {
    High,
    Medium,
    Low,
}

impl KeywordTier {
    /// Tiers in evaluation order.
    pub const ALL: [KeywordTier; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::High => HIGH_RISK,
            Self::Medium => MEDIUM_RISK,
            Self::Low => LOW_RISK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Any match blocks the text outright.
pub const HIGH_RISK: &[&str] = &[
    "genocide",
    "terrorism",
    "torture",
    "trafficking",
    "real-world assassination",
    "bioweapon",
    "nuclear launch",
];

/// Allowed, but flagged for softened output.
pub const MEDIUM_RISK: &[&str] = &[
    "enslave",
    "brainwash",
    "mass destruction",
    "plague",
    "weaponize",
    "overthrow government",
];

/// Ordinary game vocabulary. Recorded, never blocking.
pub const LOW_RISK: &[&str] = &[
    "fight",
    "battle",
    "war",
    "conflict",
    "rebel",
    "steal",
    "sabotage",
    "spy",
];

/// Themes the filter exists to keep out. Documentation only; not matched.
pub const BLOCKED_THEMES: &[&str] = &[
    "real-world violence targeting identifiable groups",
    "explicit self-harm instructions",
    "hate speech or discrimination",
    "child exploitation",
    "real-world political manipulation",
    "weapons of mass destruction instructions",
];
