//! Simulated-annealing island selection.
//!
//! Searches for a short, ordered run of islands that together provide every
//! fertility a population needs, while collecting as much slot and size
//! value as possible along the way.
//!
//! - **Annealing** ([`anneal`]): Metropolis search over permutations with a
//!   segment-relocation move and geometric cooling. Generic over the item
//!   type, the objective and the random source.
//! - **Coverage scoring** ([`coverage`]): order-sensitive objective that
//!   credits each fertility once, decays deeper items and penalises long
//!   covering runs.
//! - **Catalogs** ([`catalog`]): weight tables and faction targets for the
//!   Albion and Latium datasets.
//! - **Loading** ([`loader`]): comma-separated island records.
//! - **Campaigns** ([`campaign`]): faction-by-faction selection where each
//!   faction's islands leave the pool for the next.
//!
//! # Architecture
//!
//! `anneal` knows nothing about islands; `coverage` plugs into it through
//! the [`anneal::Objective`] trait. Everything above those two layers is
//! data and orchestration.

pub mod anneal;
pub mod campaign;
pub mod catalog;
pub mod coverage;
pub mod loader;
