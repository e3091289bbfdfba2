/// Chronos engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name reported as the active branch when no branch carries the primary flag.
pub const DEFAULT_BRANCH_NAME: &str = "Alpha Timeline";

/// Upper bound of the global butterfly index.
pub const MAX_BUTTERFLY_INDEX: f64 = 100.0;

/// Length of the hex action id handed back to callers.
pub const ACTION_ID_LEN: usize = 8;

/// Scale applied to negative link magnitudes when estimating path-local paradox risk.
pub const NEGATIVE_LINK_RISK_FACTOR: f64 = 0.3;
