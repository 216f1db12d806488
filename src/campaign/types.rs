//! Campaign results and errors.

use crate::anneal::AnnealError;
use crate::catalog::{CatalogError, Faction};
use crate::coverage::{AttributeSet, Item, ScoringError};
use std::fmt;

/// Outcome of one faction's search.
#[derive(Debug, Clone)]
pub struct StageResult {
    pub faction: Faction,

    /// Covering prefix of the annealed sequence, in order.
    pub selection: Vec<Item>,

    /// Objective value of the annealed sequence.
    pub score: f64,

    /// Whether `selection` covers the faction's whole target.
    pub complete: bool,

    /// Target attributes no item in the pool provides.
    pub uncovered: AttributeSet,
}

impl StageResult {
    /// Names of the selected items, in order.
    pub fn names(&self) -> Vec<&str> {
        self.selection.iter().map(Item::name).collect()
    }
}

/// Outcome of a full campaign.
#[derive(Debug, Clone)]
pub struct CampaignResult {
    /// One entry per faction, in solve order.
    pub stages: Vec<StageResult>,

    /// Items left unclaimed after the last stage.
    pub remaining: Vec<Item>,
}

impl CampaignResult {
    pub fn total_score(&self) -> f64 {
        self.stages.iter().map(|s| s.score).sum()
    }

    /// `true` when every stage reached full coverage.
    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(|s| s.complete)
    }

    /// Solve order of the factions.
    pub fn order(&self) -> Vec<Faction> {
        self.stages.iter().map(|s| s.faction).collect()
    }
}

/// Errors raised by a campaign.
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignError {
    /// No faction was given.
    NoFactions,
    Catalog(CatalogError),
    Scoring(ScoringError),
    Anneal(AnnealError),
}

impl fmt::Display for CampaignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignError::NoFactions => f.write_str("campaign needs at least one faction"),
            CampaignError::Catalog(e) => write!(f, "catalog error: {}", e),
            CampaignError::Scoring(e) => write!(f, "scoring error: {}", e),
            CampaignError::Anneal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CampaignError {}

impl From<CatalogError> for CampaignError {
    fn from(err: CatalogError) -> Self {
        CampaignError::Catalog(err)
    }
}

impl From<ScoringError> for CampaignError {
    fn from(err: ScoringError) -> Self {
        CampaignError::Scoring(err)
    }
}

impl From<AnnealError> for CampaignError {
    fn from(err: AnnealError) -> Self {
        CampaignError::Anneal(err)
    }
}
