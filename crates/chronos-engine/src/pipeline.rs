//! The guarded temporal command pipeline.
//!
//! validate → guardrail pre-check → process → guardrail post-check →
//! sanitize, all under the engine lock; then the world delta is applied to
//! the era state store outside it.

use chronos_core::errors::{ChronosError, ChronosResult};
use chronos_core::models::EraChangeSummary;
use chronos_core::traits::IEraStateStore;
use chronos_guardrails::{BlockReason, GuardrailDetails, GuardrailVerdict};
use serde::{Deserialize, Serialize};

use crate::engine::CausalityEngine;
use crate::result::CommandResult;
use crate::tracing_setup::events;

/// Fallback echo line when a verdict carries no message.
const BLOCKED_ECHO: &str = "Action blocked by guardrails";

/// What happened to a temporal command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Refused by a guardrail. Must be rendered distinctly from success.
    Blocked {
        reason: BlockReason,
        details: GuardrailDetails,
        echo_messages: Vec<String>,
    },
    /// Simulated and applied.
    Applied {
        result: CommandResult,
        /// `None` when no era state store was supplied.
        world_changes: Option<EraChangeSummary>,
    },
}

impl CommandOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    pub fn echo_messages(&self) -> &[String] {
        match self {
            Self::Blocked { echo_messages, .. } => echo_messages,
            Self::Applied { result, .. } => &result.echo_messages,
        }
    }
}

impl CausalityEngine {
    /// Run a command end to end.
    ///
    /// A post-check refusal still leaves the action recorded and the index
    /// updated: the effect was already simulated.
    pub fn run_command(
        &self,
        command: &str,
        era: &str,
        world: Option<&dyn IEraStateStore>,
    ) -> ChronosResult<CommandOutcome> {
        if command.trim().is_empty() {
            return Err(ChronosError::InvalidInput {
                reason: "command must not be empty".to_string(),
            });
        }
        if era.trim().is_empty() {
            return Err(ChronosError::InvalidInput {
                reason: "era must not be empty".to_string(),
            });
        }

        let result = {
            let mut state = self.lock()?;

            let index = state.butterfly_index;
            let pre = state
                .guardrails
                .evaluate_action(command, self.config.engine.pre_check_risk, index);
            if let Some(blocked) = blocked("pre_check", pre) {
                return Ok(blocked);
            }

            let mut result = self.process_locked(&mut state, command, era);

            let index = state.butterfly_index;
            let post = state.guardrails.evaluate_action(
                command,
                result.butterfly_effect.paradox_risk,
                index,
            );
            if let Some(blocked) = blocked("post_check", post) {
                return Ok(blocked);
            }

            result.butterfly_effect.narrative_changes = state
                .guardrails
                .sanitize_output(&result.butterfly_effect.narrative_changes);
            result.echo_messages = state.guardrails.sanitize_output(&result.echo_messages);
            result
        };

        let world_changes = world.map(|store| {
            let summary = store.apply_all(&result.butterfly_effect.world_state_delta);
            events::world_delta_applied(&result.action_id, summary.total_eras_affected);
            summary
        });

        Ok(CommandOutcome::Applied {
            result,
            world_changes,
        })
    }
}

fn blocked(stage: &str, verdict: GuardrailVerdict) -> Option<CommandOutcome> {
    if verdict.approved {
        return None;
    }
    let reason = verdict.reason?;
    events::action_blocked(stage, reason.as_str());

    let mut echo_messages = Vec::with_capacity(2);
    let message = verdict.details.message();
    echo_messages.push(if message.is_empty() {
        BLOCKED_ECHO.to_string()
    } else {
        message.to_string()
    });
    if let Some(suggestion) = verdict.details.suggestion() {
        echo_messages.push(suggestion.to_string());
    }

    Some(CommandOutcome::Blocked {
        reason,
        details: verdict.details,
        echo_messages,
    })
}
