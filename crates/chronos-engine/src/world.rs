//! In-memory era world states.
//!
//! Reference implementation of [`IEraStateStore`], seeded with the eight
//! canonical eras. Owns clamping: stability stays in [0,100], tech level in
//! [0,10], and mood follows stability.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chronos_core::errors::{ChronosError, ChronosResult};
use chronos_core::models::{EraDelta, EraWorldState};
use chronos_core::traits::IEraStateStore;

const MAX_STABILITY: i32 = 100;
const MAX_TECH_LEVEL: i32 = 10;

const MOOD_CHAOTIC: &str = "Chaotic, fearful";
const MOOD_TENSE: &str = "Tense, unstable";
const MOOD_PEACEFUL: &str = "Peaceful, prosperous";

struct EraSeed {
    era: &'static str,
    year: i32,
    stability: i32,
    tech_level: i32,
    mood: &'static str,
    faction: &'static str,
}

const ERA_SEEDS: &[EraSeed] = &[
    EraSeed {
        era: "Dark Ages",
        year: 800,
        stability: 70,
        tech_level: 1,
        mood: "Fearful, superstitious",
        faction: "Order of the Temporal Monks",
    },
    EraSeed {
        era: "Medieval",
        year: 1200,
        stability: 55,
        tech_level: 2,
        mood: "Warlike, ambitious",
        faction: "The Iron Crown",
    },
    EraSeed {
        era: "Renaissance",
        year: 1400,
        stability: 82,
        tech_level: 3,
        mood: "Curious, inventive, secretive",
        faction: "The Medici Temporal Society",
    },
    EraSeed {
        era: "Enlightenment",
        year: 1750,
        stability: 78,
        tech_level: 4,
        mood: "Rational, experimental",
        faction: "The Temporal Academy",
    },
    EraSeed {
        era: "Industrial",
        year: 1900,
        stability: 60,
        tech_level: 5,
        mood: "Progressive, exploitative",
        faction: "Chronos Industries",
    },
    EraSeed {
        era: "Digital",
        year: 2024,
        stability: 65,
        tech_level: 7,
        mood: "Anxious, hyper-connected",
        faction: "Chronos AI Collective",
    },
    EraSeed {
        era: "Neo Age",
        year: 2200,
        stability: 88,
        tech_level: 8,
        mood: "Hopeful, isolated",
        faction: "The Temporal Colony Authority",
    },
    EraSeed {
        era: "Cyberpunk",
        year: 2847,
        stability: 40,
        tech_level: 9,
        mood: "Dystopian, rebellious",
        faction: "Neo-Kyoto Corporate Syndicate",
    },
];

/// Era world states held in memory, keyed by era name.
pub struct InMemoryEraStates {
    states: RwLock<BTreeMap<String, EraWorldState>>,
}

impl Default for InMemoryEraStates {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InMemoryEraStates {
    /// An empty store.
    pub fn empty() -> Self {
        Self {
            states: RwLock::new(BTreeMap::new()),
        }
    }

    /// The eight canonical eras.
    pub fn seeded() -> Self {
        let store = Self::empty();
        for seed in ERA_SEEDS {
            store.insert(EraWorldState {
                era: seed.era.to_string(),
                year: seed.year,
                stability: seed.stability,
                tech_level: seed.tech_level,
                mood: seed.mood.to_string(),
                dominant_faction: seed.faction.to_string(),
            });
        }
        store
    }

    /// Insert or replace an era.
    pub fn insert(&self, state: EraWorldState) {
        match self.states.write() {
            Ok(mut states) => {
                states.insert(state.era.clone(), state);
            }
            Err(e) => tracing::warn!(error = %e, "era state lock poisoned; insert dropped"),
        }
    }

    /// All eras, ordered by year.
    pub fn all_states(&self) -> ChronosResult<Vec<EraWorldState>> {
        let states = self
            .states
            .read()
            .map_err(|e| ChronosError::ConcurrencyError(e.to_string()))?;
        let mut all: Vec<EraWorldState> = states.values().cloned().collect();
        all.sort_by_key(|s| s.year);
        Ok(all)
    }
}

impl IEraStateStore for InMemoryEraStates {
    fn apply_delta(&self, era: &str, delta: &EraDelta) -> ChronosResult<Vec<String>> {
        let mut states = self
            .states
            .write()
            .map_err(|e| ChronosError::ConcurrencyError(e.to_string()))?;
        let state = states.get_mut(era).ok_or_else(|| ChronosError::EraNotFound {
            era: era.to_string(),
        })?;

        let mut changes = Vec::new();

        let old = state.stability;
        state.stability = old.saturating_add(delta.stability_change).clamp(0, MAX_STABILITY);
        changes.push(format!("Stability: {old} → {}", state.stability));

        if let Some(shift) = delta.tech_level_shift {
            let old = state.tech_level;
            state.tech_level = old.saturating_add(shift).clamp(0, MAX_TECH_LEVEL);
            if state.tech_level != old {
                changes.push(format!("Tech Level: {old} → {}", state.tech_level));
            }
        }

        if let Some(mood) = mood_for(state.stability) {
            state.mood = mood.to_string();
        }
        Ok(changes)
    }

    fn get_state(&self, era: &str) -> Option<EraWorldState> {
        self.states.read().ok()?.get(era).cloned()
    }
}

/// Mood forced by stability. Mid-range stability keeps the era's own mood.
fn mood_for(stability: i32) -> Option<&'static str> {
    if stability < 30 {
        Some(MOOD_CHAOTIC)
    } else if stability < 50 {
        Some(MOOD_TENSE)
    } else if stability > 80 {
        Some(MOOD_PEACEFUL)
    } else {
        None
    }
}
