//! Simulated annealing over permutations.
//!
//! A single-solution trajectory search that reorders a fixed collection of
//! items. Each trial cuts a random contiguous segment out of a copy of the
//! current sequence and splices it back at a random position; candidates
//! are accepted by the Metropolis criterion for **maximization** and the
//! temperature cools geometrically after every anneal.
//!
//! The objective is injected as any [`Objective`] (plain closures qualify)
//! and randomness as any [`Draws`] source (every `rand::Rng` qualifies).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod error;
mod perturb;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use error::AnnealError;
pub use perturb::{relocate_segment, SegmentMove};
pub use runner::{AnnealResult, AnnealRunner, DEFAULT_SEED};
pub use types::{Draws, Objective};
