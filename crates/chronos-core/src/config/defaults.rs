// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_INITIAL_BUTTERFLY_INDEX: f64 = 50.0;
pub const DEFAULT_INDEX_GAIN: f64 = 12.0;
pub const DEFAULT_PARADOX_THRESHOLD: f64 = 0.7;
pub const DEFAULT_PRE_CHECK_RISK: f64 = 0.3;
pub const DEFAULT_RECENT_ACTION_WINDOW: usize = 5;

// --- Guardrails ---
pub const DEFAULT_GRIDLOCK_THRESHOLD: f64 = 0.85;
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.70;
pub const DEFAULT_COOLDOWN_RATE: f64 = 0.05;
pub const DEFAULT_ACCUMULATION_RATE: f64 = 0.1;
pub const DEFAULT_RISK_WEIGHT: f64 = 0.6;
pub const DEFAULT_INDEX_WEIGHT: f64 = 0.4;

// --- Oracle ---
pub const DEFAULT_ORACLE_ENABLED: bool = false;
pub const DEFAULT_ORACLE_ENDPOINT: &str = "http://localhost:8088/v1/butterfly";
pub const DEFAULT_ORACLE_MODEL: &str = "temporal-reasoner";
pub const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_STABILITY_CHANGE: i32 = 25;
pub const DEFAULT_ORACLE_MAX_IN_FLIGHT: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
