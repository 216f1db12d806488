//! Annealing configuration.

use super::error::AnnealError;

/// Configuration for the annealing engine.
///
/// Cooling is geometric: after every anneal (one full pass of
/// `max_trials` trials) the temperature is multiplied by `cooling_rate`.
/// The iteration budget `max_anneals * max_trials` is the only stopping
/// criterion.
///
/// # Examples
///
/// ```
/// use isle_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_anneals(50)
///     .with_max_trials(50)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.9)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Number of outer iterations (temperature levels).
    pub max_anneals: usize,

    /// Number of trials at each temperature.
    pub max_trials: usize,

    /// Starting temperature. Pick it around 150% of a typical score change.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed used by [`AnnealRunner::run`](super::AnnealRunner::run).
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_anneals: 200,
            max_trials: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_anneals(mut self, n: usize) -> Self {
        self.max_anneals = n;
        self
    }

    pub fn with_max_trials(mut self, n: usize) -> Self {
        self.max_trials = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of trials the run will perform.
    pub fn budget(&self) -> usize {
        self.max_anneals.saturating_mul(self.max_trials)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if self.max_anneals == 0 {
            return Err(AnnealError::InvalidConfiguration(
                "max_anneals must be positive".into(),
            ));
        }
        if self.max_trials == 0 {
            return Err(AnnealError::InvalidConfiguration(
                "max_trials must be positive".into(),
            ));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(AnnealError::InvalidConfiguration(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(AnnealError::InvalidConfiguration(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
