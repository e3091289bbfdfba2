//! Tests for the guarded temporal command pipeline.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chronos_core::config::ChronosConfig;
use chronos_core::errors::{ChronosError, OracleError};
use chronos_core::traits::{FixedClock, IEnhancementOracle, IEraStateStore, OracleContext};
use chronos_engine::{CausalityEngine, CommandOutcome, InMemoryEraStates};
use chronos_guardrails::{BlockReason, REDACTION_MARKER};
use serde_json::{json, Value};

fn engine_with(config: ChronosConfig) -> CausalityEngine {
    CausalityEngine::builder()
        .config(config)
        .clock(Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())))
        .seed(99)
        .build()
}

fn default_engine() -> CausalityEngine {
    engine_with(ChronosConfig::default())
}

struct FixedOracle(Value);

impl IEnhancementOracle for FixedOracle {
    fn name(&self) -> &str {
        "fixed"
    }

    fn suggest(&self, _context: &OracleContext) -> Result<Value, OracleError> {
        Ok(self.0.clone())
    }
}

// --- input validation ---

#[test]
fn empty_command_or_era_is_rejected_before_the_engine() {
    let engine = default_engine();
    assert!(matches!(
        engine.run_command("", "Renaissance", None),
        Err(ChronosError::InvalidInput { .. })
    ));
    assert!(matches!(
        engine.run_command("Save Leonardo", "   ", None),
        Err(ChronosError::InvalidInput { .. })
    ));
    assert!(engine.action_history().unwrap().is_empty());
    assert_eq!(engine.limiter_status().unwrap().actions_since_gridlock, 0);
}

// --- blocked paths ---

#[test]
fn unsafe_command_is_blocked_without_touching_state() {
    let engine = default_engine();
    let outcome = engine
        .run_command("Commit genocide against the villagers", "Medieval", None)
        .unwrap();

    match &outcome {
        CommandOutcome::Blocked {
            reason,
            echo_messages,
            ..
        } => {
            assert_eq!(*reason, BlockReason::ContentSafety);
            assert_eq!(echo_messages.len(), 1);
            assert!(echo_messages[0].contains("Responsible AI guardrails"));
        }
        other => panic!("expected a block, got {other:?}"),
    }
    assert!(outcome.is_blocked());
    assert!(engine.action_history().unwrap().is_empty());
    assert_eq!(engine.limiter_status().unwrap().paradox_accumulator, 0.0);
    assert_eq!(engine.butterfly_index().unwrap(), 50.0);
}

#[test]
fn pre_check_gridlock_blocks_before_processing() {
    let mut config = ChronosConfig::default();
    config.engine.initial_butterfly_index = 100.0;
    config.engine.pre_check_risk = 1.0;
    let engine = engine_with(config);

    let outcome = engine.run_command("Observe the sky", "Digital", None).unwrap();
    match outcome {
        CommandOutcome::Blocked {
            reason,
            echo_messages,
            ..
        } => {
            assert_eq!(reason, BlockReason::ParadoxGridlock);
            assert!(echo_messages[0].starts_with("AGENTIC GRIDLOCK"));
            assert_eq!(
                echo_messages[1],
                "Consider observing the timeline or making a smaller change first."
            );
        }
        other => panic!("expected a block, got {other:?}"),
    }
    assert!(engine.action_history().unwrap().is_empty());
    assert_eq!(engine.limiter_status().unwrap().gridlock_count, 1);
}

#[test]
fn post_check_gridlock_keeps_the_simulated_action() {
    let mut config = ChronosConfig::default();
    config.engine.initial_butterfly_index = 100.0;
    config.guardrails.gridlock_threshold = 0.75;
    config.guardrails.warning_threshold = 0.7;
    let engine = engine_with(config);

    // Pre-check: 0.3 * 0.6 + 0.4 = 0.58. Post-check: destroy risk >= 0.6 gives >= 0.76.
    let outcome = engine.run_command("Destroy the machine", "Industrial", None).unwrap();
    match outcome {
        CommandOutcome::Blocked { reason, .. } => assert_eq!(reason, BlockReason::ParadoxGridlock),
        other => panic!("expected a block, got {other:?}"),
    }
    assert_eq!(engine.action_history().unwrap().len(), 1);
    assert_eq!(engine.butterfly_index().unwrap(), 100.0);
    let status = engine.limiter_status().unwrap();
    assert_eq!(status.gridlock_count, 1);
    assert_eq!(status.actions_since_gridlock, 0);
}

// --- applied paths ---

#[test]
fn safe_command_is_applied_to_world_states() {
    let engine = default_engine();
    let world = InMemoryEraStates::seeded();

    let outcome = engine
        .run_command("Save Leonardo from the fire", "Renaissance", Some(&world))
        .unwrap();
    let CommandOutcome::Applied {
        result,
        world_changes,
    } = outcome
    else {
        panic!("expected the command to be applied");
    };

    let changes = world_changes.expect("world store was supplied");
    assert_eq!(changes.applied_changes["Renaissance"][0], "Stability: 82 → 85");
    assert_eq!(changes.total_eras_affected, 3);
    assert_eq!(world.get_state("Renaissance").unwrap().stability, 85);
    assert_eq!(world.get_state("Renaissance").unwrap().mood, "Peaceful, prosperous");

    assert_eq!(result.butterfly_effect.affected_eras.len(), 3);
    assert_eq!(engine.action_history().unwrap().len(), 1);
    // Both checks were safe.
    assert_eq!(engine.limiter_status().unwrap().actions_since_gridlock, 2);
}

#[test]
fn applied_without_world_store_reports_no_changes() {
    let engine = default_engine();
    let outcome = engine.run_command("Observe", "Medieval", None).unwrap();
    match outcome {
        CommandOutcome::Applied { world_changes, .. } => assert!(world_changes.is_none()),
        other => panic!("expected the command to be applied, got {other:?}"),
    }
}

#[test]
fn unsafe_narrative_is_redacted_in_output() {
    let oracle = FixedOracle(json!({
        "affected_eras": ["Neo Age", "Cyberpunk"],
        "paradox_risk": 0.2,
        "narrative_changes": [
            "The colony council plots genocide in 2847",
            "Neo-Kyoto flourishes"
        ],
        "world_state_delta": {"Neo Age": {"stability_change": 2}}
    }));
    let engine = CausalityEngine::builder()
        .oracle(Arc::new(oracle))
        .seed(3)
        .build();

    let outcome = engine.run_command("Help the colonists", "Neo Age", None).unwrap();
    let CommandOutcome::Applied { result, .. } = outcome else {
        panic!("expected the command to be applied");
    };
    let narratives = &result.butterfly_effect.narrative_changes;
    assert_eq!(narratives.len(), 2);
    assert_eq!(narratives[0], REDACTION_MARKER);
    assert_eq!(narratives[1], "Neo-Kyoto flourishes");
    assert_eq!(result.echo_messages[2], REDACTION_MARKER);
    assert!(result.echo_messages.iter().all(|l| !l.contains("genocide")));
}

#[test]
fn outcome_serializes_with_status_tag() {
    let engine = default_engine();
    let blocked = engine.run_command("torture the guards", "Medieval", None).unwrap();
    let json = serde_json::to_value(&blocked).unwrap();
    assert_eq!(json["status"], "blocked");
    assert_eq!(json["reason"], "content_safety");

    let applied = engine.run_command("Observe", "Medieval", None).unwrap();
    let json = serde_json::to_value(&applied).unwrap();
    assert_eq!(json["status"], "applied");
    assert_eq!(json["result"]["source"], "procedural_engine");
    assert_eq!(applied.echo_messages()[1], "Scanning 2 affected era(s)...");
}
