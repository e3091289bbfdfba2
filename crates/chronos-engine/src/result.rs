use chronos_core::models::{ButterflyEffect, EffectSource};
use serde::{Deserialize, Serialize};

/// Everything `process_command` reports about one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub action_id: String,
    pub command: String,
    pub source: EffectSource,
    pub butterfly_effect: ButterflyEffect,
    /// Index after this action, rounded to one decimal place.
    pub butterfly_index: f64,
    /// Progress lines for UI streaming. Never used for decisions.
    pub echo_messages: Vec<String>,
    pub is_paradox: bool,
}
