//! Property tests for engine invariants over random command sequences.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chronos_core::models::AnchorStatus;
use chronos_core::traits::FixedClock;
use chronos_engine::CausalityEngine;
use proptest::prelude::*;

const ERAS: &[&str] = &[
    "Dark Ages",
    "Medieval",
    "Renaissance",
    "Enlightenment",
    "Industrial",
    "Digital",
    "Neo Age",
    "Cyberpunk",
    "Atlantis",
];

const VERBS: &[&str] = &["Save", "Destroy", "Alter", "Observe", "Rescue", "Remove", "Travel to"];

fn command_strategy() -> impl Strategy<Value = (String, String)> {
    (0..VERBS.len(), 0..ERAS.len(), "[a-z]{1,10}").prop_map(|(v, e, noun)| {
        (format!("{} the {}", VERBS[v], noun), ERAS[e].to_string())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn effects_respect_shape_and_ranges(
        seed in any::<u64>(),
        steps in prop::collection::vec(command_strategy(), 1..25),
    ) {
        let engine = CausalityEngine::builder()
            .clock(Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            )))
            .seed(seed)
            .build();
        let mut statuses: Vec<AnchorStatus> =
            engine.anchors().unwrap().iter().map(|a| a.status).collect();

        for (command, era) in &steps {
            let result = engine.process_command(command, era).unwrap();
            let effect = &result.butterfly_effect;

            prop_assert!(!effect.affected_eras.is_empty());
            prop_assert_eq!(&effect.affected_eras[0], era);
            prop_assert!(!effect.narrative_changes.is_empty());
            prop_assert!((0.0..=1.0).contains(&effect.paradox_risk));
            prop_assert!((0.0..=100.0).contains(&result.butterfly_index));

            for (name, delta) in &effect.world_state_delta {
                prop_assert!(effect.affected_eras.contains(name));
                if name == era {
                    prop_assert!(delta.tech_level_shift.is_none());
                } else {
                    prop_assert!((-10..=5).contains(&delta.stability_change));
                    prop_assert!(matches!(delta.tech_level_shift, Some(-1..=1)));
                }
            }

            let now: Vec<AnchorStatus> =
                engine.anchors().unwrap().iter().map(|a| a.status).collect();
            for (before, after) in statuses.iter().zip(now.iter()) {
                prop_assert!(after >= before, "anchor status regressed");
            }
            statuses = now;
        }
        prop_assert_eq!(engine.action_history().unwrap().len(), steps.len());
    }
}
