//! World-state deltas for procedural effects.

use std::collections::BTreeMap;

use chronos_core::models::EraDelta;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::intent::IntentBucket;

const TRIGGER_STABILITY_DESTROY: i32 = -5;
const TRIGGER_STABILITY_OTHER: i32 = 3;
const RIPPLE_STABILITY_MIN: i32 = -10;
const RIPPLE_STABILITY_MAX: i32 = 5;
/// Weighted towards no shift.
const TECH_SHIFTS: [i32; 4] = [-1, 0, 0, 1];

/// One delta per affected era. `affected[0]` is the triggering era and gets a
/// fixed stability change with no tech shift.
pub fn world_delta<R: Rng + ?Sized>(
    bucket: IntentBucket,
    affected: &[String],
    rng: &mut R,
) -> BTreeMap<String, EraDelta> {
    let mut deltas = BTreeMap::new();
    let Some((trigger, ripple)) = affected.split_first() else {
        return deltas;
    };

    let trigger_change = if bucket == IntentBucket::Destroy {
        TRIGGER_STABILITY_DESTROY
    } else {
        TRIGGER_STABILITY_OTHER
    };
    deltas.insert(trigger.clone(), EraDelta::stability(trigger_change));

    for era in ripple {
        let stability = rng.gen_range(RIPPLE_STABILITY_MIN..=RIPPLE_STABILITY_MAX);
        let tech = TECH_SHIFTS.choose(rng).copied().unwrap_or(0);
        deltas.insert(era.clone(), EraDelta::with_tech_shift(stability, tech));
    }
    deltas
}
