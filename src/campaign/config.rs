//! Campaign configuration.

use crate::anneal::{AnnealConfig, DEFAULT_SEED};

/// Configuration for a faction campaign.
///
/// # Examples
///
/// ```
/// use isle_anneal::anneal::AnnealConfig;
/// use isle_anneal::campaign::CampaignConfig;
///
/// let config = CampaignConfig::default()
///     .with_anneal(AnnealConfig::default().with_max_anneals(20))
///     .with_seed(9)
///     .with_shuffle(true);
/// assert_eq!(config.seed, Some(9));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CampaignConfig {
    /// Annealing tuning for every stage. `None` uses the catalog's tuning.
    pub anneal: Option<AnnealConfig>,

    /// Seed for the campaign's random stream. Falls back to the annealing
    /// seed, then to [`DEFAULT_SEED`].
    pub seed: Option<u64>,

    /// Shuffle the pool before each stage instead of starting from the
    /// record order.
    pub shuffle: bool,
}

impl CampaignConfig {
    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = Some(anneal);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Annealing tuning to use, given the catalog's own.
    pub fn resolve_anneal(&self, catalog_default: &AnnealConfig) -> AnnealConfig {
        self.anneal.clone().unwrap_or_else(|| catalog_default.clone())
    }

    /// Base seed of the campaign's random stream.
    pub fn resolve_seed(&self, anneal: &AnnealConfig) -> u64 {
        self.seed.or(anneal.seed).unwrap_or(DEFAULT_SEED)
    }
}
