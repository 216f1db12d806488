//! Coverage scoring.
//!
//! Items carry a set of attribute flags drawn from a fixed universe, a few
//! integer slot counts and a size tier. A [`CoverageObjective`] walks an
//! ordering of items, crediting each attribute only the first time it is
//! covered, and stops as soon as the target set is satisfied. Deeper items
//! are discounted geometrically and penalised linearly, which steers the
//! annealer toward short, rich covering prefixes.

mod attributes;
mod item;
mod objective;
mod weights;

pub use attributes::{Attribute, AttributeSet, AttributeUniverse, MAX_ATTRIBUTES};
pub use item::{Item, SizeTier};
pub use objective::{covering_prefix, CoverageObjective, CoveringPrefix};
pub use weights::{CoverageWeights, ScoringError, SizeBonus, SlotScaling};
