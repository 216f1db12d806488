//! Seams for the annealing engine: the objective and the random source.

use rand::Rng;

/// Scores a candidate ordering. Higher is better.
///
/// The engine assumes the score depends only on the sequence: calling it
/// twice on the same ordering must return the same value.
///
/// Any `Fn(&[T]) -> f64` closure is an objective:
///
/// ```
/// use isle_anneal::anneal::Objective;
///
/// let first_three = |s: &[u32]| s.iter().take(3).map(|&v| f64::from(v)).sum::<f64>();
/// assert_eq!(first_three.score(&[5, 4, 3, 2]), 12.0);
/// ```
pub trait Objective<T> {
    fn score(&self, sequence: &[T]) -> f64;
}

impl<T, F> Objective<T> for F
where
    F: Fn(&[T]) -> f64,
{
    #[inline]
    fn score(&self, sequence: &[T]) -> f64 {
        self(sequence)
    }
}

/// Uniform random draws consumed by the engine.
///
/// Implemented for every [`rand::Rng`]; pass a seeded generator for
/// reproducible runs. The engine draws, per trial, the segment start, the
/// segment length and the insertion point, followed by one unit draw only
/// when the candidate scores worse than the current sequence.
pub trait Draws {
    /// Uniform integer in `low..=high`.
    fn draw_index(&mut self, low: usize, high: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn draw_unit(&mut self) -> f64;
}

impl<R: Rng> Draws for R {
    #[inline]
    fn draw_index(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }

    #[inline]
    fn draw_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
