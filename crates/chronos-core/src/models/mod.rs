pub mod action;
pub mod anchor;
pub mod branch;
pub mod butterfly_effect;
pub mod causal_link;
pub mod causality_report;
pub mod era_world_state;
pub mod timeline_state;

pub use action::ActionRecord;
pub use anchor::{Anchor, AnchorStatus};
pub use branch::TimelineBranch;
pub use butterfly_effect::{ButterflyEffect, EffectSource, EraDelta};
pub use causal_link::{CausalLink, EffectPolarity};
pub use causality_report::CausalityReport;
pub use era_world_state::{EraChangeSummary, EraWorldState};
pub use timeline_state::TimelineState;
