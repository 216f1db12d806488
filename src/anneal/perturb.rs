//! Segment relocation: cut a random contiguous run and splice it elsewhere.

use super::types::Draws;

/// One relocation move on a sequence of length `n`.
///
/// Invariants: `start < n`, `1 <= length <= n - start`,
/// `insert_at <= n - length`. `insert_at` indexes the remainder left after
/// the segment is cut out, so `insert_at == start` is the identity move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMove {
    pub start: usize,
    pub length: usize,
    pub insert_at: usize,
}

impl SegmentMove {
    /// Draws a move for a sequence of length `n` (requires `n >= 1`),
    /// consuming exactly three draws: start, length, insertion point.
    pub fn draw<D: Draws + ?Sized>(n: usize, draws: &mut D) -> Self {
        debug_assert!(n >= 1);
        let start = draws.draw_index(0, n - 1);
        let length = draws.draw_index(1, n - start);
        let insert_at = draws.draw_index(0, n - length);
        Self {
            start,
            length,
            insert_at,
        }
    }

    /// Whether this move leaves the sequence unchanged.
    pub fn is_identity(&self) -> bool {
        self.insert_at == self.start
    }

    /// Applies the move in place.
    ///
    /// Moving the segment left is a right-rotation of
    /// `[insert_at, start + length)`; moving it right is a left-rotation of
    /// `[start, insert_at + length)`.
    pub fn apply<T>(&self, sequence: &mut [T]) {
        let end = self.start + self.length;
        debug_assert!(end <= sequence.len());
        debug_assert!(self.insert_at + self.length <= sequence.len());

        if self.insert_at < self.start {
            sequence[self.insert_at..end].rotate_right(self.length);
        } else if self.insert_at > self.start {
            sequence[self.start..self.insert_at + self.length].rotate_left(self.length);
        }
    }
}

/// Returns a perturbed copy of `sequence`; the input is left untouched.
///
/// Sequences shorter than two elements are copied unchanged without
/// consuming any draws.
pub fn relocate_segment<T: Clone, D: Draws + ?Sized>(sequence: &[T], draws: &mut D) -> Vec<T> {
    let mut candidate = sequence.to_vec();
    if candidate.len() >= 2 {
        SegmentMove::draw(candidate.len(), draws).apply(&mut candidate);
    }
    candidate
}
