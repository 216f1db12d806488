//! Order-sensitive coverage scoring.

use super::attributes::AttributeSet;
use super::item::Item;
use super::weights::{CoverageWeights, ScoringError};
use crate::anneal::Objective;
use std::borrow::Borrow;

/// Scores an ordering of items against a target attribute set.
///
/// Walking the sequence front to back, item `i` contributes
/// `decay^i * value - i * penalty`, where `value` counts the weights of the
/// item's attributes that are still uncovered, plus all of its slot and size
/// bonuses. The walk stops as soon as the target is fully covered, so items
/// past the covering prefix do not affect the score.
///
/// # Examples
///
/// ```
/// use isle_anneal::coverage::{
///     Attribute, AttributeSet, CoverageObjective, CoverageWeights, Item, SizeBonus, SizeTier,
/// };
///
/// let x = Attribute::new(0);
/// let y = Attribute::new(1);
/// let weights = CoverageWeights::new(vec![10.0, 10.0], vec![], SizeBonus::default()).unwrap();
/// let target = AttributeSet::from_attributes([x, y]);
/// let objective = CoverageObjective::new(target, weights, 0.9, 10.0).unwrap();
///
/// let both = Item::new("C", target, vec![], SizeTier::Small);
/// assert_eq!(objective.evaluate(&[both]), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct CoverageObjective {
    target: AttributeSet,
    weights: CoverageWeights,
    extra_item_reduction_rate: f64,
    extra_item_penalty: f64,
}

impl CoverageObjective {
    /// Creates an objective.
    ///
    /// `extra_item_reduction_rate` must lie in (0, 1] and
    /// `extra_item_penalty` must be finite and non-negative. Every target
    /// attribute needs a weight entry.
    pub fn new(
        target: AttributeSet,
        weights: CoverageWeights,
        extra_item_reduction_rate: f64,
        extra_item_penalty: f64,
    ) -> Result<Self, ScoringError> {
        if !(extra_item_reduction_rate > 0.0 && extra_item_reduction_rate <= 1.0) {
            return Err(ScoringError::InvalidParameter(format!(
                "extra_item_reduction_rate must be in (0, 1], got {extra_item_reduction_rate}"
            )));
        }
        if !(extra_item_penalty.is_finite() && extra_item_penalty >= 0.0) {
            return Err(ScoringError::InvalidParameter(format!(
                "extra_item_penalty must be non-negative, got {extra_item_penalty}"
            )));
        }
        if let Some(attribute) = target.difference(weights.weighed()).iter().next() {
            return Err(ScoringError::MissingAttributeWeight {
                item: "target".to_string(),
                attribute,
            });
        }
        Ok(Self {
            target,
            weights,
            extra_item_reduction_rate,
            extra_item_penalty,
        })
    }

    pub fn target(&self) -> AttributeSet {
        self.target
    }

    pub fn weights(&self) -> &CoverageWeights {
        &self.weights
    }

    pub fn extra_item_reduction_rate(&self) -> f64 {
        self.extra_item_reduction_rate
    }

    pub fn extra_item_penalty(&self) -> f64 {
        self.extra_item_penalty
    }

    /// Verifies that every attribute and slot kind carried by `items` has a
    /// weight entry.
    ///
    /// Unweighted attributes never reach the weight table during scoring,
    /// since the target is checked at construction, but an item with more
    /// slot kinds than the table weighs panics when scored. Run this once
    /// before handing the items to the search.
    pub fn check_items<I: Borrow<Item>>(&self, items: &[I]) -> Result<(), ScoringError> {
        let weighed = self.weights.weighed();
        for item in items.iter().map(Borrow::borrow) {
            if let Some(attribute) = item.attributes().difference(weighed).iter().next() {
                return Err(ScoringError::MissingAttributeWeight {
                    item: item.name().to_string(),
                    attribute,
                });
            }
            if item.slots().len() > self.weights.slot_count() {
                return Err(ScoringError::MissingSlotWeight {
                    item: item.name().to_string(),
                    slot: self.weights.slot_count(),
                });
            }
        }
        Ok(())
    }

    /// Undecayed value of one item given the attributes still uncovered.
    pub fn item_value(&self, item: &Item, remaining: AttributeSet) -> f64 {
        let fresh: f64 = item
            .attributes()
            .intersection(remaining)
            .iter()
            .map(|a| self.weights.attribute_for(a, item.slots()))
            .sum();

        // slots and size always count in full
        let slots: f64 = item
            .slots()
            .iter()
            .enumerate()
            .map(|(kind, &count)| self.weights.slot(kind) * f64::from(count))
            .sum();

        fresh + slots + self.weights.size(item.size())
    }

    /// Scores `sequence` in order. Higher is better.
    pub fn evaluate<I: Borrow<Item>>(&self, sequence: &[I]) -> f64 {
        let mut remaining = self.target;
        let mut total = 0.0;

        for (i, item) in sequence.iter().map(Borrow::borrow).enumerate() {
            let decay = self.extra_item_reduction_rate.powi(i as i32);
            total += decay * self.item_value(item, remaining);
            total -= i as f64 * self.extra_item_penalty;
            remaining = remaining.difference(item.attributes());
            if remaining.is_empty() {
                break;
            }
        }

        total
    }
}

impl<I: Borrow<Item>> Objective<I> for CoverageObjective {
    fn score(&self, sequence: &[I]) -> f64 {
        self.evaluate(sequence)
    }
}

/// The shortest leading run of a sequence that covers a target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveringPrefix {
    len: usize,
    uncovered: AttributeSet,
}

impl CoveringPrefix {
    /// Number of leading items in the prefix. Equals the sequence length
    /// when coverage is never reached.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the prefix covers the whole target.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Target attributes no item of the sequence provides.
    pub fn uncovered(&self) -> AttributeSet {
        self.uncovered
    }

    /// Slices the prefix out of the sequence it was computed from.
    pub fn items<'a, I>(&self, sequence: &'a [I]) -> &'a [I] {
        &sequence[..self.len.min(sequence.len())]
    }
}

/// Computes the covering prefix of `sequence` for `target`.
pub fn covering_prefix<I: Borrow<Item>>(sequence: &[I], target: AttributeSet) -> CoveringPrefix {
    let mut remaining = target;
    let mut len = 0;
    for item in sequence.iter().map(Borrow::borrow) {
        if remaining.is_empty() {
            break;
        }
        remaining = remaining.difference(item.attributes());
        len += 1;
    }
    CoveringPrefix {
        len,
        uncovered: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{Attribute, SizeBonus, SizeTier};

    const X: Attribute = Attribute::new(0);
    const Y: Attribute = Attribute::new(1);

    fn set(attrs: &[Attribute]) -> AttributeSet {
        attrs.iter().copied().collect()
    }

    fn item(name: &str, attrs: &[Attribute]) -> Item {
        Item::new(name, set(attrs), vec![], SizeTier::Small)
    }

    fn objective(rate: f64, penalty: f64) -> CoverageObjective {
        let weights = CoverageWeights::new(vec![10.0, 10.0], vec![5.0], SizeBonus::default()).unwrap();
        CoverageObjective::new(set(&[X, Y]), weights, rate, penalty).unwrap()
    }

    #[test]
    fn test_single_covering_item_beats_pair() {
        let obj = objective(0.9, 10.0);
        let a = item("A", &[X]);
        let b = item("B", &[Y]);
        let c = item("C", &[X, Y]);

        let single = obj.evaluate(&[&c]);
        let pair = obj.evaluate(&[&a, &b]);
        assert_eq!(single, 20.0);
        // 10 + (0.9 * 10 - 1 * 10)
        assert!((pair - 9.0).abs() < 1e-12);
        assert!(single > pair);
    }

    #[test]
    fn test_already_covered_attributes_score_zero() {
        let obj = objective(1.0, 0.0);
        let a = item("A", &[X]);
        let a2 = item("A2", &[X]);
        let b = item("B", &[Y]);
        // A2 adds nothing: X was already covered by A
        assert_eq!(obj.evaluate(&[&a, &a2, &b]), 20.0);
    }

    #[test]
    fn test_items_after_full_coverage_ignored() {
        let obj = objective(0.9, 10.0);
        let c = item("C", &[X, Y]);
        let rich = Item::new("Rich", set(&[]), vec![100], SizeTier::ExtraLarge);
        assert_eq!(obj.evaluate(&[&c, &rich]), obj.evaluate(&[&c]));
    }

    #[test]
    fn test_slots_and_size_always_count() {
        let weights =
            CoverageWeights::new(vec![10.0, 10.0], vec![5.0, 2.0], SizeBonus::new(40.0, 20.0, 10.0, 1.0)).unwrap();
        let obj = CoverageObjective::new(set(&[X, Y]), weights, 0.5, 0.0).unwrap();
        let a = Item::new("A", set(&[X]), vec![2, 1], SizeTier::Large);
        let a2 = Item::new("A2", set(&[X]), vec![1, 0], SizeTier::Medium);
        // A: 10 + 10 + 2 + 20 = 42; A2 (decay 0.5): 0 + 5 + 10 = 15
        assert_eq!(obj.evaluate(&[&a, &a2]), 42.0 + 0.5 * 15.0);
    }

    #[test]
    fn test_incomplete_coverage_is_not_an_error() {
        let obj = objective(1.0, 1.0);
        let a = item("A", &[X]);
        let empty: [&Item; 0] = [];
        assert_eq!(obj.evaluate(&[&a]), 10.0);
        assert_eq!(obj.evaluate(&empty), 0.0);
    }

    #[test]
    fn test_penalty_grows_linearly() {
        let obj = objective(1.0, 3.0);
        let n1 = item("N1", &[]);
        let n2 = item("N2", &[]);
        let n3 = item("N3", &[]);
        // 0 - 0 - 3 - 6
        assert_eq!(obj.evaluate(&[&n1, &n2, &n3]), -9.0);
    }

    #[test]
    fn test_deterministic() {
        let obj = objective(0.9, 10.0);
        let seq = vec![item("A", &[X]), item("B", &[Y])];
        assert_eq!(obj.evaluate(&seq), obj.evaluate(&seq));
    }

    #[test]
    fn test_invalid_parameters() {
        let weights = CoverageWeights::new(vec![1.0, 1.0], vec![], SizeBonus::default()).unwrap();
        assert!(CoverageObjective::new(set(&[X]), weights.clone(), 0.0, 1.0).is_err());
        assert!(CoverageObjective::new(set(&[X]), weights.clone(), 1.1, 1.0).is_err());
        assert!(CoverageObjective::new(set(&[X]), weights.clone(), 0.9, -1.0).is_err());
        assert!(CoverageObjective::new(set(&[X]), weights, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_target_outside_weight_table() {
        let weights = CoverageWeights::new(vec![1.0], vec![], SizeBonus::default()).unwrap();
        let err = CoverageObjective::new(set(&[X, Y]), weights, 0.9, 0.0).unwrap_err();
        assert_eq!(
            err,
            ScoringError::MissingAttributeWeight {
                item: "target".into(),
                attribute: Y
            }
        );
    }

    #[test]
    fn test_check_items() {
        let obj = objective(0.9, 1.0);
        let ok = Item::new("ok", set(&[X]), vec![3], SizeTier::Small);
        let bad_slot = Item::new("bad", set(&[X]), vec![3, 1], SizeTier::Small);
        let bad_attr = item("odd", &[Attribute::new(9)]);
        assert!(obj.check_items(&[&ok]).is_ok());
        assert!(matches!(
            obj.check_items(&[&ok, &bad_slot]),
            Err(ScoringError::MissingSlotWeight { slot: 1, .. })
        ));
        assert!(matches!(
            obj.check_items(&[bad_attr]),
            Err(ScoringError::MissingAttributeWeight { .. })
        ));
    }

    #[test]
    fn test_covering_prefix() {
        let a = item("A", &[X]);
        let b = item("B", &[Y]);
        let c = item("C", &[X, Y]);
        let target = set(&[X, Y]);

        let seq = [&a, &b, &c];
        let prefix = covering_prefix(&seq, target);
        assert_eq!(prefix.len(), 2);
        assert!(prefix.is_complete());
        assert_eq!(prefix.items(&seq).len(), 2);

        let seq = [&c, &a];
        assert_eq!(covering_prefix(&seq, target).len(), 1);

        let seq = [&a, &a];
        let prefix = covering_prefix(&seq, target);
        assert_eq!(prefix.len(), 2);
        assert!(!prefix.is_complete());
        assert_eq!(prefix.uncovered(), set(&[Y]));
    }

    #[test]
    fn test_annealing_picks_dual_item_with_bonus() {
        use crate::anneal::{AnnealConfig, AnnealRunner};

        let weights = CoverageWeights::new(vec![50.0, 50.0], vec![5.0], SizeBonus::default()).unwrap();
        let obj = CoverageObjective::new(set(&[X, Y]), weights, 0.9, 10.0).unwrap();
        let only_x = Item::new("only-x", set(&[X]), vec![0], SizeTier::Small);
        let only_y = Item::new("only-y", set(&[Y]), vec![0], SizeTier::Small);
        let dual = Item::new("dual", set(&[X, Y]), vec![0], SizeTier::Small);
        let dual_bonus = Item::new("dual-bonus", set(&[X, Y]), vec![3], SizeTier::Small);

        // both dual items cover alone; the slot bonus breaks the tie
        assert_eq!(obj.evaluate(&[&dual]), 100.0);
        assert_eq!(obj.evaluate(&[&dual_bonus]), 115.0);
        assert_eq!(obj.evaluate(&[&only_x, &only_y]), 85.0);

        let initial = vec![&only_x, &only_y, &dual, &dual_bonus];
        for seed in 0..8 {
            let config = AnnealConfig::default()
                .with_max_anneals(50)
                .with_max_trials(50)
                .with_initial_temperature(100.0)
                .with_cooling_rate(0.9)
                .with_seed(seed);
            let result = AnnealRunner::run(&initial, &obj, &config).unwrap();
            let prefix = covering_prefix(&result.sequence, obj.target());
            let names: Vec<&str> = prefix.items(&result.sequence).iter().map(|i| i.name()).collect();
            assert_eq!(names, vec!["dual-bonus"], "seed {seed}");
            assert_eq!(result.score, 115.0);
        }
    }

    #[test]
    fn test_covering_prefix_empty_target() {
        let a = item("A", &[X]);
        let prefix = covering_prefix(&[&a], AttributeSet::empty());
        assert!(prefix.is_empty());
        assert!(prefix.is_complete());
    }
}
