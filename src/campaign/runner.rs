//! Sequential faction selection.
//!
//! # Algorithm
//!
//! For each faction in order:
//!
//! 1. Optionally shuffle the pool
//! 2. Anneal the pool against the faction's coverage objective
//! 3. Claim the covering prefix of the annealed sequence for the faction
//! 4. Hand the rest of the annealed sequence, in its annealed order, to the
//!    next faction
//!
//! All stages of one campaign draw from a single random stream.

use super::config::CampaignConfig;
use super::types::{CampaignError, CampaignResult, StageResult};
use crate::anneal::{AnnealConfig, AnnealRunner};
use crate::catalog::{Catalog, Faction};
use crate::coverage::{covering_prefix, Item};
use rand::Rng;
use u_numflow::random::create_rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs faction campaigns over a pool of items.
pub struct Campaign;

impl Campaign {
    /// Solves `factions` one after another over `items`.
    ///
    /// Items claimed by one faction are unavailable to every later one.
    /// Every item is checked against the catalog's weight table before any
    /// search runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use isle_anneal::anneal::AnnealConfig;
    /// use isle_anneal::campaign::{Campaign, CampaignConfig};
    /// use isle_anneal::catalog::{Catalog, Faction};
    /// use isle_anneal::coverage::{Item, SizeTier};
    ///
    /// let catalog = Catalog::albion();
    /// let u = catalog.universe();
    /// let items = vec![
    ///     Item::new("Roma", u.set_of(&["Herbs", "Silver", "Resin", "Small Birds"]).unwrap(), vec![0, 0], SizeTier::Large),
    ///     Item::new("Ostia", u.set_of(&["Flax", "Sea Shell", "Iron"]).unwrap(), vec![0, 0], SizeTier::Medium),
    /// ];
    /// let config = CampaignConfig::default()
    ///     .with_anneal(AnnealConfig::default().with_max_anneals(5).with_max_trials(20));
    ///
    /// let result = Campaign::run(&items, &catalog, &[Faction::Roman], &config).unwrap();
    /// assert!(result.stages[0].complete);
    /// assert_eq!(result.stages[0].selection.len(), 2);
    /// ```
    pub fn run(
        items: &[Item],
        catalog: &Catalog,
        factions: &[Faction],
        config: &CampaignConfig,
    ) -> Result<CampaignResult, CampaignError> {
        let anneal = config.resolve_anneal(catalog.anneal_config());
        let seed = config.resolve_seed(&anneal);
        Self::run_seeded(items, catalog, factions, config, &anneal, seed)
    }

    /// Runs each faction order as an independent campaign.
    ///
    /// Order `k` draws from a stream seeded with `seed + k`, so results do
    /// not depend on how many orders are evaluated or in which thread.
    pub fn run_orders(
        items: &[Item],
        catalog: &Catalog,
        orders: &[Vec<Faction>],
        config: &CampaignConfig,
    ) -> Result<Vec<CampaignResult>, CampaignError> {
        let anneal = config.resolve_anneal(catalog.anneal_config());
        let seed = config.resolve_seed(&anneal);
        let solve = |(k, order): (usize, &Vec<Faction>)| {
            Self::run_seeded(items, catalog, order, config, &anneal, seed.wrapping_add(k as u64))
        };

        #[cfg(feature = "parallel")]
        let results = orders.par_iter().enumerate().map(solve).collect();

        #[cfg(not(feature = "parallel"))]
        let results = orders.iter().enumerate().map(solve).collect();

        results
    }

    fn run_seeded(
        items: &[Item],
        catalog: &Catalog,
        factions: &[Faction],
        config: &CampaignConfig,
        anneal: &AnnealConfig,
        seed: u64,
    ) -> Result<CampaignResult, CampaignError> {
        if factions.is_empty() {
            return Err(CampaignError::NoFactions);
        }
        anneal.validate()?;
        for &faction in factions {
            catalog.objective(faction)?.check_items(items)?;
        }

        let mut rng = create_rng(seed);
        let mut pool = items.to_vec();
        let mut stages = Vec::with_capacity(factions.len());

        for &faction in factions {
            let (stage, rest) = run_stage(faction, &pool, catalog, anneal, config.shuffle, &mut rng)?;
            stages.push(stage);
            pool = rest;
        }

        Ok(CampaignResult {
            stages,
            remaining: pool,
        })
    }
}

#[tracing::instrument(level = "debug", name = "stage", skip(pool, catalog, anneal, rng), fields(pool = pool.len()))]
fn run_stage<R: Rng>(
    faction: Faction,
    pool: &[Item],
    catalog: &Catalog,
    anneal: &AnnealConfig,
    shuffle: bool,
    rng: &mut R,
) -> Result<(StageResult, Vec<Item>), CampaignError> {
    let objective = catalog.objective(faction)?;

    let mut initial: Vec<&Item> = pool.iter().collect();
    if shuffle {
        u_numflow::random::shuffle(&mut initial, rng);
    }

    let result = AnnealRunner::solve(&initial, &objective, anneal, rng)?;
    let prefix = covering_prefix(&result.sequence, objective.target());

    let selection: Vec<Item> = prefix
        .items(&result.sequence)
        .iter()
        .map(|&item| item.clone())
        .collect();
    let rest: Vec<Item> = result.sequence[prefix.len()..]
        .iter()
        .map(|&item| item.clone())
        .collect();

    tracing::info!(
        %faction,
        selected = selection.len(),
        score = result.score,
        complete = prefix.is_complete(),
        "stage finished"
    );
    if !prefix.is_complete() {
        tracing::warn!(
            %faction,
            uncovered = %catalog.universe().describe(prefix.uncovered()),
            "pool cannot cover the faction's target"
        );
    }

    let stage = StageResult {
        faction,
        selection,
        score: result.score,
        complete: prefix.is_complete(),
        uncovered: prefix.uncovered(),
    };
    Ok((stage, rest))
}
