//! Weight tables for coverage scoring.

use super::attributes::{Attribute, AttributeSet};
use super::item::SizeTier;

/// Errors raised while building weight tables or checking items against them.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A universe was declared with more flags than a set can hold.
    UniverseTooLarge(usize),
    /// A name did not resolve to any flag of the universe.
    UnknownAttribute(String),
    /// A weight was negative or not finite.
    InvalidWeight { what: String, value: f64 },
    /// Decay must lie in (0, 1] and the penalty must be non-negative.
    InvalidParameter(String),
    /// An item or target refers to an attribute with no weight entry.
    MissingAttributeWeight { item: String, attribute: Attribute },
    /// An item carries more slot kinds than the table weighs.
    MissingSlotWeight { item: String, slot: usize },
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringError::UniverseTooLarge(n) => {
                write!(f, "attribute universe has {} flags, at most 64 are supported", n)
            }
            ScoringError::UnknownAttribute(name) => write!(f, "unknown attribute '{}'", name),
            ScoringError::InvalidWeight { what, value } => {
                write!(f, "weight for {} must be finite and non-negative, got {}", what, value)
            }
            ScoringError::InvalidParameter(msg) => f.write_str(msg),
            ScoringError::MissingAttributeWeight { item, attribute } => {
                write!(f, "'{}' has attribute {} with no weight entry", item, attribute)
            }
            ScoringError::MissingSlotWeight { item, slot } => {
                write!(f, "'{}' has slot kind {} with no weight entry", item, slot)
            }
        }
    }
}

impl std::error::Error for ScoringError {}

/// Flat bonus granted per size tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBonus {
    pub extra_large: f64,
    pub large: f64,
    pub medium: f64,
    pub small: f64,
}

impl SizeBonus {
    pub const fn new(extra_large: f64, large: f64, medium: f64, small: f64) -> Self {
        Self {
            extra_large,
            large,
            medium,
            small,
        }
    }

    #[inline]
    pub fn get(&self, tier: SizeTier) -> f64 {
        match tier {
            SizeTier::ExtraLarge => self.extra_large,
            SizeTier::Large => self.large,
            SizeTier::Medium => self.medium,
            SizeTier::Small => self.small,
        }
    }
}

impl Default for SizeBonus {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Scales one attribute's weight by an item's count of one slot kind.
///
/// The table weight assumes `baseline` slots; an item with `n` slots of
/// kind `slot` earns `weight * n / baseline` for the attribute instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotScaling {
    pub attribute: Attribute,
    pub slot: usize,
    pub baseline: f64,
}

/// Per-attribute, per-slot-kind and per-size weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageWeights {
    attributes: Vec<f64>,
    slots: Vec<f64>,
    sizes: SizeBonus,
    scaling: Vec<SlotScaling>,
}

impl CoverageWeights {
    /// Builds a table. `attributes[i]` weighs `Attribute::new(i)`;
    /// `slots[k]` weighs one unit of slot kind `k`.
    pub fn new(attributes: Vec<f64>, slots: Vec<f64>, sizes: SizeBonus) -> Result<Self, ScoringError> {
        for (i, &w) in attributes.iter().enumerate() {
            check_weight(w, || format!("attribute {}", i))?;
        }
        for (k, &w) in slots.iter().enumerate() {
            check_weight(w, || format!("slot kind {}", k))?;
        }
        for tier in SizeTier::ALL {
            check_weight(sizes.get(tier), || format!("size {}", tier))?;
        }
        Ok(Self {
            attributes,
            slots,
            sizes,
            scaling: Vec::new(),
        })
    }

    /// Makes `attribute`'s weight proportional to the item's count of slot
    /// kind `slot`, relative to `baseline` slots.
    pub fn with_slot_scaling(
        mut self,
        attribute: Attribute,
        slot: usize,
        baseline: f64,
    ) -> Result<Self, ScoringError> {
        if attribute.index() >= self.attributes.len() {
            return Err(ScoringError::InvalidParameter(format!(
                "slot scaling names attribute {} with no weight entry",
                attribute
            )));
        }
        if slot >= self.slots.len() {
            return Err(ScoringError::InvalidParameter(format!(
                "slot scaling names slot kind {} with no weight entry",
                slot
            )));
        }
        if !(baseline.is_finite() && baseline > 0.0) {
            return Err(ScoringError::InvalidParameter(format!(
                "slot scaling baseline must be positive, got {}",
                baseline
            )));
        }
        self.scaling.retain(|s| s.attribute != attribute);
        self.scaling.push(SlotScaling {
            attribute,
            slot,
            baseline,
        });
        Ok(self)
    }

    /// Builds a table from weights known to be valid.
    pub(crate) fn from_parts(attributes: Vec<f64>, slots: Vec<f64>, sizes: SizeBonus) -> Self {
        debug_assert!(attributes.iter().chain(&slots).all(|w| w.is_finite() && *w >= 0.0));
        Self {
            attributes,
            slots,
            sizes,
            scaling: Vec::new(),
        }
    }

    /// Adds a scaling entry known to be valid.
    pub(crate) fn scaled_by(mut self, attribute: Attribute, slot: usize, baseline: f64) -> Self {
        debug_assert!(slot < self.slots.len() && baseline > 0.0);
        self.scaling.push(SlotScaling {
            attribute,
            slot,
            baseline,
        });
        self
    }

    /// Number of attributes this table weighs.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn attribute(&self, attr: Attribute) -> f64 {
        self.attributes[attr.index()]
    }

    /// Weight `attr` earns on an item with the given slot counts.
    pub fn attribute_for(&self, attr: Attribute, slots: &[u32]) -> f64 {
        let weight = self.attribute(attr);
        match self.scaling.iter().find(|s| s.attribute == attr) {
            Some(s) => {
                let count = slots.get(s.slot).copied().unwrap_or(0);
                weight * f64::from(count) / s.baseline
            }
            None => weight,
        }
    }

    pub fn scaling(&self) -> &[SlotScaling] {
        &self.scaling
    }

    #[inline]
    pub fn slot(&self, kind: usize) -> f64 {
        self.slots[kind]
    }

    #[inline]
    pub fn size(&self, tier: SizeTier) -> f64 {
        self.sizes.get(tier)
    }

    /// Every attribute this table has an entry for.
    pub fn weighed(&self) -> AttributeSet {
        AttributeSet::first(self.attributes.len())
    }
}

fn check_weight(value: f64, what: impl FnOnce() -> String) -> Result<(), ScoringError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoringError::InvalidWeight {
            what: what(),
            value,
        })
    }
}
