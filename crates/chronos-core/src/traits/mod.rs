mod clock;
mod era_state;
mod oracle;

pub use clock::{FixedClock, IClock, SystemClock};
pub use era_state::IEraStateStore;
pub use oracle::{IEnhancementOracle, OracleContext};
