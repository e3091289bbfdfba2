use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the append-only action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,
    pub command: String,
    pub era: String,
    pub timestamp: DateTime<Utc>,
}
