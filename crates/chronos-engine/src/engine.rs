//! CausalityEngine: owns the timeline graph, the butterfly index, the action
//! log, and the guardrails, all behind one lock.

use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use chronos_causal::{CausalGraphStore, TraversalConfig, TraversalResult};
use chronos_core::config::ChronosConfig;
use chronos_core::constants::{ACTION_ID_LEN, DEFAULT_BRANCH_NAME, MAX_BUTTERFLY_INDEX};
use chronos_core::errors::{ChronosError, ChronosResult};
use chronos_core::models::{
    ActionRecord, Anchor, AnchorStatus, ButterflyEffect, CausalityReport, EffectSource,
    TimelineBranch, TimelineState,
};
use chronos_core::traits::{IClock, IEnhancementOracle, OracleContext, SystemClock};
use chronos_guardrails::{GuardrailOrchestrator, LimiterSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info_span};

use crate::butterfly::{self, PARADOX_WARNING};
use crate::oracle;
use crate::result::CommandResult;
use crate::tracing_setup::events;

/// Invalid-report reason for an era with no anchor.
pub const ERA_NOT_FOUND: &str = "Era not found in timeline";

/// Mutable engine state. Every read-modify-write happens under one lock.
pub(crate) struct EngineState {
    pub(crate) store: CausalGraphStore,
    pub(crate) butterfly_index: f64,
    pub(crate) history: Vec<ActionRecord>,
    pub(crate) guardrails: GuardrailOrchestrator,
    rng: ChaCha8Rng,
    seq: u64,
}

/// The causality engine façade.
///
/// One instance per process, shared by reference between request handlers.
pub struct CausalityEngine {
    state: Mutex<EngineState>,
    pub(crate) config: ChronosConfig,
    clock: Arc<dyn IClock>,
    oracle: Option<Arc<dyn IEnhancementOracle>>,
    oracle_in_flight: Arc<AtomicUsize>,
}

/// Builder for [`CausalityEngine`].
pub struct CausalityEngineBuilder {
    config: ChronosConfig,
    clock: Option<Arc<dyn IClock>>,
    seed: Option<u64>,
    oracle: Option<Arc<dyn IEnhancementOracle>>,
    store: Option<CausalGraphStore>,
}

impl CausalityEngineBuilder {
    pub fn config(mut self, config: ChronosConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Fix the RNG seed. Overrides `engine.rng_seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn oracle(mut self, oracle: Arc<dyn IEnhancementOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Start from a custom graph instead of the canonical seed timeline.
    pub fn store(mut self, store: CausalGraphStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> CausalityEngine {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let store = self
            .store
            .unwrap_or_else(|| CausalGraphStore::seeded(clock.now()));
        let rng = match self.seed.or(self.config.engine.rng_seed) {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let oracle = self.oracle.or_else(|| default_oracle(&self.config));
        let butterfly_index = clamp_index(self.config.engine.initial_butterfly_index);

        CausalityEngine {
            state: Mutex::new(EngineState {
                store,
                butterfly_index,
                history: Vec::new(),
                guardrails: GuardrailOrchestrator::new(self.config.guardrails.clone()),
                rng,
                seq: 0,
            }),
            config: self.config,
            clock,
            oracle,
            oracle_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[cfg(feature = "http-oracle")]
fn default_oracle(config: &ChronosConfig) -> Option<Arc<dyn IEnhancementOracle>> {
    if config.oracle.enabled {
        Some(Arc::new(oracle::HttpOracle::from_config(&config.oracle)))
    } else {
        None
    }
}

#[cfg(not(feature = "http-oracle"))]
fn default_oracle(config: &ChronosConfig) -> Option<Arc<dyn IEnhancementOracle>> {
    if config.oracle.enabled {
        tracing::warn!(
            "oracle enabled but built without the http-oracle feature; \
             using procedural engine only"
        );
    }
    None
}

impl CausalityEngine {
    pub fn builder() -> CausalityEngineBuilder {
        CausalityEngineBuilder {
            config: ChronosConfig::default(),
            clock: None,
            seed: None,
            oracle: None,
            store: None,
        }
    }

    /// Engine over the seed timeline with the given configuration.
    pub fn new(config: ChronosConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &ChronosConfig {
        &self.config
    }

    pub(crate) fn lock(&self) -> ChronosResult<MutexGuard<'_, EngineState>> {
        self.state
            .lock()
            .map_err(|e| ChronosError::ConcurrencyError(e.to_string()))
    }

    // --- Commands ---

    /// Simulate `command` in `era` and update the engine.
    pub fn process_command(&self, command: &str, era: &str) -> ChronosResult<CommandResult> {
        let mut state = self.lock()?;
        Ok(self.process_locked(&mut state, command, era))
    }

    /// The body of `process_command`, for callers already holding the lock.
    pub(crate) fn process_locked(
        &self,
        state: &mut EngineState,
        command: &str,
        era: &str,
    ) -> CommandResult {
        let _span = info_span!("chronos.process_command", era = %era).entered();

        let action_id = self.record_action(state, command, era);

        let (mut effect, source) = match self.consult_oracle(state, command, era) {
            Some(effect) => (effect, EffectSource::Oracle),
            None => (
                butterfly::compute(command, era, &state.store, &mut state.rng),
                EffectSource::ProceduralEngine,
            ),
        };

        let gain = effect.paradox_risk * self.config.engine.index_gain;
        state.butterfly_index = clamp_index(state.butterfly_index + gain);

        let is_paradox = effect.paradox_risk > self.config.engine.paradox_threshold;
        if is_paradox {
            let anchor_id = state.store.resolve_era(era).map(|a| a.id.clone());
            if let Some(anchor) = anchor_id.as_deref().and_then(|id| state.store.anchor_mut(id)) {
                anchor.escalate(AnchorStatus::Paradox);
            }
            effect.narrative_changes.push(PARADOX_WARNING.to_string());
            events::paradox_triggered(&action_id, era, anchor_id.as_deref(), effect.paradox_risk);
        }

        let butterfly_index = round1(state.butterfly_index);
        let echo_messages = echo_lines(command, &effect, butterfly_index);

        events::command_processed(
            &action_id,
            era,
            source.as_str(),
            effect.paradox_risk,
            butterfly_index,
        );

        CommandResult {
            action_id,
            command: command.to_string(),
            source,
            butterfly_effect: effect,
            butterfly_index,
            echo_messages,
            is_paradox,
        }
    }

    fn record_action(&self, state: &mut EngineState, command: &str, era: &str) -> String {
        let timestamp = self.clock.now();
        state.seq += 1;

        let mut hasher = blake3::Hasher::new();
        hasher.update(command.as_bytes());
        hasher.update(timestamp.to_rfc3339().as_bytes());
        hasher.update(&state.seq.to_le_bytes());
        let hex = hasher.finalize().to_hex();
        let id = hex.as_str()[..ACTION_ID_LEN].to_string();

        state.history.push(ActionRecord {
            id: id.clone(),
            command: command.to_string(),
            era: era.to_string(),
            timestamp,
        });
        id
    }

    /// Oracle-first effect. `None` means use the procedural path.
    fn consult_oracle(
        &self,
        state: &EngineState,
        command: &str,
        era: &str,
    ) -> Option<ButterflyEffect> {
        let oracle = self.oracle.as_ref()?;
        let window = self.config.engine.recent_action_window;
        let recent_start = state.history.len().saturating_sub(window);
        let context = OracleContext {
            command: command.to_string(),
            current_era: era.to_string(),
            timeline: state.store.anchors().into_iter().cloned().collect(),
            butterfly_index: state.butterfly_index,
            recent_actions: state.history[recent_start..].to_vec(),
        };

        let limits = oracle::CallLimits::from_config(&self.config.oracle);
        match oracle::consult(oracle, context, limits, &self.oracle_in_flight) {
            Ok(effect) => Some(effect),
            Err(e) => {
                events::oracle_degraded(oracle.name(), &e.to_string());
                None
            }
        }
    }

    // --- Queries ---

    /// Is there a causal chain from `source_era` to `target_era`?
    pub fn check_causality(
        &self,
        source_era: &str,
        target_era: &str,
    ) -> ChronosResult<CausalityReport> {
        let _span = info_span!(
            "chronos.check_causality",
            source = %source_era,
            target = %target_era
        )
        .entered();
        let state = self.lock()?;
        let store = &state.store;

        let (Some(source), Some(target)) =
            (store.resolve_era(source_era), store.resolve_era(target_era))
        else {
            debug!("era missing from timeline");
            return Ok(CausalityReport::invalid(ERA_NOT_FOUND));
        };

        let path = store.find_path(&source.id, &target.id);
        let paradox_risk = store.path_paradox_risk(&path);
        Ok(CausalityReport {
            valid: !path.is_empty(),
            chain_length: path.len(),
            description: format!(
                "Causal chain from {source_era} to {target_era}: {} links",
                path.len()
            ),
            path,
            paradox_risk,
            reason: None,
        })
    }

    /// Read-only snapshot of the timeline.
    pub fn get_timeline_state(&self) -> ChronosResult<TimelineState> {
        let state = self.lock()?;
        let store = &state.store;
        Ok(TimelineState {
            anchors: store.anchors().into_iter().cloned().collect(),
            branches: store.branches().to_vec(),
            butterfly_index: round1(state.butterfly_index),
            active_branch: store
                .primary_branch()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| DEFAULT_BRANCH_NAME.to_string()),
            total_actions: state.history.len(),
        })
    }

    pub fn limiter_status(&self) -> ChronosResult<LimiterSnapshot> {
        Ok(self.lock()?.guardrails.limiter_status())
    }

    pub fn anchors(&self) -> ChronosResult<Vec<Anchor>> {
        Ok(self.lock()?.store.anchors().into_iter().cloned().collect())
    }

    pub fn branches(&self) -> ChronosResult<Vec<TimelineBranch>> {
        Ok(self.lock()?.store.branches().to_vec())
    }

    /// The action log, oldest first.
    pub fn action_history(&self) -> ChronosResult<Vec<ActionRecord>> {
        Ok(self.lock()?.history.clone())
    }

    /// Unrounded butterfly index.
    pub fn butterfly_index(&self) -> ChronosResult<f64> {
        Ok(self.lock()?.butterfly_index)
    }

    /// Anchors reachable forward from an era's representative anchor.
    pub fn downstream(&self, era: &str) -> ChronosResult<TraversalResult> {
        let state = self.lock()?;
        let anchor = state
            .store
            .resolve_era(era)
            .ok_or_else(|| ChronosError::EraNotFound {
                era: era.to_string(),
            })?;
        Ok(state.store.reachable(&anchor.id, &TraversalConfig::default()))
    }
}

fn echo_lines(command: &str, effect: &ButterflyEffect, butterfly_index: f64) -> Vec<String> {
    let mut echo = Vec::with_capacity(effect.narrative_changes.len().min(3) + 3);
    echo.push(format!("Processing temporal command: \"{command}\""));
    echo.push(format!(
        "Scanning {} affected era(s)...",
        effect.affected_eras.len()
    ));
    echo.extend(effect.narrative_changes.iter().take(3).cloned());
    echo.push(format!("Butterfly Index updated: {butterfly_index:.1}%"));
    echo
}

fn clamp_index(index: f64) -> f64 {
    if index.is_finite() {
        index.clamp(0.0, MAX_BUTTERFLY_INDEX)
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
