//! Multi-faction campaigns.
//!
//! Some datasets serve several populations whose needs overlap. A campaign
//! solves one faction at a time: each stage anneals the remaining pool
//! against that faction's target, claims the covering prefix, and leaves
//! the rest for the next faction. Because claims are exclusive, the solve
//! order matters; [`Campaign::run_orders`] evaluates several orders side by
//! side.

mod config;
mod runner;
mod types;

pub use config::CampaignConfig;
pub use runner::Campaign;
pub use types::{CampaignError, CampaignResult, StageResult};
