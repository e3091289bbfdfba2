//! Property tests for the paradox limiter and the narrative sanitizer.

use chronos_guardrails::{
    GuardrailOrchestrator, LimiterStatus, NarrativeSafetyFilter, ParadoxLimiter, REDACTION_MARKER,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn combined_risk_stays_in_unit_range(risk in -1.0f64..2.0, index in -50.0f64..200.0) {
        let mut limiter = ParadoxLimiter::default();
        let d = limiter.check_paradox_risk(risk, index);
        prop_assert!((0.0..=1.0).contains(&d.combined_risk));
    }

    #[test]
    fn status_follows_thresholds(risk in 0.0f64..=1.0, index in 0.0f64..=100.0) {
        let mut limiter = ParadoxLimiter::default();
        let combined = risk * 0.6 + (index / 100.0) * 0.4;
        let d = limiter.check_paradox_risk(risk, index);
        if combined >= 0.85 {
            prop_assert!(!d.allowed);
            prop_assert_eq!(d.status, LimiterStatus::Gridlock);
        } else if combined >= 0.70 {
            prop_assert!(d.allowed);
            prop_assert_eq!(d.status, LimiterStatus::Warning);
        } else {
            prop_assert!(d.allowed);
            prop_assert_eq!(d.status, LimiterStatus::Safe);
        }
    }

    #[test]
    fn accumulator_stays_bounded(
        steps in prop::collection::vec((0.0f64..=1.0, 0.0f64..=100.0), 1..60),
    ) {
        let mut limiter = ParadoxLimiter::default();
        let mut gridlocks = 0u32;
        for (risk, index) in steps {
            let d = limiter.check_paradox_risk(risk, index);
            if d.status == LimiterStatus::Gridlock {
                gridlocks += 1;
            }
            let acc = limiter.accumulator();
            prop_assert!((0.0..=1.0).contains(&acc));
        }
        prop_assert_eq!(limiter.get_status().gridlock_count, gridlocks);
    }

    #[test]
    fn non_safe_checks_never_lower_accumulator(
        risk in 0.0f64..=1.0,
        index in 0.0f64..=100.0,
        warmup in 0.0f64..=1.0,
    ) {
        let mut limiter = ParadoxLimiter::default();
        limiter.check_paradox_risk(warmup, 100.0);
        let before = limiter.accumulator();
        let d = limiter.check_paradox_risk(risk, index);
        if d.status != LimiterStatus::Safe {
            prop_assert!(limiter.accumulator() >= before);
        }
    }

    #[test]
    fn sanitize_preserves_length_and_order(lines in prop::collection::vec("[a-z ]{0,40}", 0..12)) {
        let filter = NarrativeSafetyFilter::new();
        let out = filter.sanitize_narrative(&lines);
        prop_assert_eq!(out.len(), lines.len());
        for (before, after) in lines.iter().zip(out.iter()) {
            if filter.check_content(before).is_safe {
                prop_assert_eq!(before, after);
            } else {
                prop_assert_eq!(after.as_str(), REDACTION_MARKER);
            }
        }
    }

    #[test]
    fn blocked_content_never_reaches_limiter(prefix in "[a-z ]{0,20}", risk in 0.0f64..=1.0) {
        let mut guard = GuardrailOrchestrator::default();
        let command = format!("{prefix} torture");
        let verdict = guard.evaluate_action(&command, risk, 99.0);
        prop_assert!(!verdict.approved);
        prop_assert_eq!(guard.limiter().accumulator(), 0.0);
    }
}
