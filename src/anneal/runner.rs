//! Annealing execution loop.
//!
//! # Algorithm
//!
//! 1. Score the initial sequence
//! 2. For each of `max_anneals` temperature levels:
//!    a. Run `max_trials` trials: relocate a random segment of a copy of the
//!       current sequence and score it
//!    b. Accept strictly better candidates; accept strictly worse ones with
//!       probability `exp(delta / T)`; never accept equal scores
//!    c. Multiply the temperature by `cooling_rate`
//! 3. Return the last accepted sequence
//!
//! There is no best-so-far tracking: the returned sequence is the current
//! one when the budget runs out.

use super::config::AnnealConfig;
use super::error::AnnealError;
use super::perturb::relocate_segment;
use super::types::{Draws, Objective};
use u_numflow::random::create_rng;

/// Seed used by [`AnnealRunner::run`] when the config carries none.
pub const DEFAULT_SEED: u64 = 42;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<T> {
    /// The last accepted sequence.
    pub sequence: Vec<T>,

    /// Score of `sequence`.
    pub score: f64,

    /// Temperature after the final cooling step.
    pub final_temperature: f64,

    /// Total number of trials (candidate evaluations).
    pub trials: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Current score at the start and at the end of every anneal.
    pub score_history: Vec<f64>,
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs with an RNG seeded from `config.seed`.
    pub fn run<T, O>(
        initial: &[T],
        objective: &O,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<T>, AnnealError>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
    {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::solve(initial, objective, config, &mut rng)
    }

    /// Optimizes the ordering of `initial`, drawing all randomness from
    /// `draws`.
    ///
    /// The caller's slice is never modified; every trial perturbs a copy.
    /// Fails only when `config` does not validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use isle_anneal::anneal::{AnnealConfig, AnnealRunner};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// // reward large values in the first three positions
    /// let objective = |s: &[u32]| {
    ///     f64::from(s[0]) + 0.9 * f64::from(s[1]) + 0.8 * f64::from(s[2])
    /// };
    /// let initial: Vec<u32> = (0..10).map(|i| i * 10).collect();
    /// let config = AnnealConfig::default()
    ///     .with_max_anneals(60)
    ///     .with_max_trials(200)
    ///     .with_initial_temperature(50.0)
    ///     .with_cooling_rate(0.9);
    ///
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let result = AnnealRunner::solve(&initial, &objective, &config, &mut rng).unwrap();
    /// assert_eq!(&result.sequence[..3], &[90, 80, 70]);
    /// ```
    pub fn solve<T, O, D>(
        initial: &[T],
        objective: &O,
        config: &AnnealConfig,
        draws: &mut D,
    ) -> Result<AnnealResult<T>, AnnealError>
    where
        T: Clone,
        O: Objective<T> + ?Sized,
        D: Draws + ?Sized,
    {
        config.validate()?;

        let mut current = initial.to_vec();
        let mut current_score = objective.score(&current);
        let mut temperature = config.initial_temperature;

        let mut trials = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut score_history = Vec::with_capacity(config.max_anneals + 1);
        score_history.push(current_score);

        // nothing to reorder
        let movable = current.len() >= 2;

        for anneal in 0..config.max_anneals {
            let accepted_before = accepted_moves;

            if movable {
                for _ in 0..config.max_trials {
                    let candidate = relocate_segment(&current, draws);
                    let candidate_score = objective.score(&candidate);
                    trials += 1;

                    let accept = if candidate_score > current_score {
                        improving_moves += 1;
                        true
                    } else if candidate_score < current_score {
                        let delta = candidate_score - current_score;
                        let probability = (delta / temperature).exp();
                        draws.draw_unit() < probability
                    } else {
                        // ties (and NaN) keep the incumbent
                        false
                    };

                    if accept {
                        current = candidate;
                        current_score = candidate_score;
                        accepted_moves += 1;
                    }
                }
            }

            tracing::debug!(
                anneal,
                temperature,
                score = current_score,
                accepted = accepted_moves - accepted_before,
                "anneal finished"
            );

            score_history.push(current_score);
            temperature *= config.cooling_rate;
        }

        tracing::debug!(
            trials,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            score = current_score,
            "annealing complete"
        );

        Ok(AnnealResult {
            sequence: current,
            score: current_score,
            final_temperature: temperature,
            trials,
            accepted_moves,
            improving_moves,
            score_history,
        })
    }
}
