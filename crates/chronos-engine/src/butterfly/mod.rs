//! Procedural butterfly-effect calculator.
//!
//! Always available and total: every command in every era yields an effect
//! whose first affected era is the triggering one.

pub mod delta;
pub mod narrative;

use chronos_causal::CausalGraphStore;
use chronos_core::models::ButterflyEffect;
use rand::Rng;

use crate::intent::IntentBucket;

pub use narrative::PARADOX_WARNING;

/// The triggering era followed by the era of every direct successor of its
/// representative anchor, deduplicated, in link order.
///
/// Eras with no anchor affect only themselves.
pub fn affected_eras(store: &CausalGraphStore, era: &str) -> Vec<String> {
    let mut eras = vec![era.to_string()];
    let Some(anchor) = store.resolve_era(era) else {
        return eras;
    };
    for link in store.outgoing_links(&anchor.id) {
        if let Some(target) = store.anchor(&link.target_id) {
            if !eras.contains(&target.era) {
                eras.push(target.era.clone());
            }
        }
    }
    eras
}

/// Compute the procedural effect of `command` issued in `era`.
///
/// Does not touch engine state: index updates and paradox escalation are
/// applied by the caller.
pub fn compute<R: Rng + ?Sized>(
    command: &str,
    era: &str,
    store: &CausalGraphStore,
    rng: &mut R,
) -> ButterflyEffect {
    let bucket = IntentBucket::classify(command);
    let paradox_risk = bucket.draw_risk(rng);
    let affected = affected_eras(store, era);
    let narrative_changes = narrative::generate(bucket, era, &affected);
    let world_state_delta = delta::world_delta(bucket, &affected, rng);

    ButterflyEffect {
        source_action: command.to_string(),
        affected_eras: affected,
        paradox_risk,
        narrative_changes,
        world_state_delta,
    }
}
