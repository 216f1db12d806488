//! Immutable items (islands) and their size tiers.

use super::attributes::{Attribute, AttributeSet};
use std::fmt;

/// Categorical size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeTier {
    ExtraLarge,
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub const ALL: [SizeTier; 4] = [
        SizeTier::ExtraLarge,
        SizeTier::Large,
        SizeTier::Medium,
        SizeTier::Small,
    ];

    /// Parses a record size code. Unrecognised codes fall back to `Small`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "XL" => SizeTier::ExtraLarge,
            "L" => SizeTier::Large,
            "M" => SizeTier::Medium,
            _ => SizeTier::Small,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SizeTier::ExtraLarge => "XL",
            SizeTier::Large => "L",
            SizeTier::Medium => "M",
            SizeTier::Small => "S",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A selectable unit carrying attribute flags, slot counts and a size.
///
/// Items never change once built; the search only reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    attributes: AttributeSet,
    slots: Vec<u32>,
    size: SizeTier,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        attributes: AttributeSet,
        slots: Vec<u32>,
        size: SizeTier,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            slots,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> AttributeSet {
        self.attributes
    }

    pub fn has(&self, attr: Attribute) -> bool {
        self.attributes.contains(attr)
    }

    /// Slot counts, one entry per slot kind in catalog order.
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    pub fn size(&self) -> SizeTier {
        self.size
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_codes() {
        assert_eq!(SizeTier::from_code("XL"), SizeTier::ExtraLarge);
        assert_eq!(SizeTier::from_code(" L "), SizeTier::Large);
        assert_eq!(SizeTier::from_code("M"), SizeTier::Medium);
        assert_eq!(SizeTier::from_code("S"), SizeTier::Small);
        assert_eq!(SizeTier::from_code("huge"), SizeTier::Small);
        for tier in SizeTier::ALL {
            assert_eq!(SizeTier::from_code(tier.code()), tier);
        }
    }

    #[test]
    fn test_item_accessors() {
        let attrs = AttributeSet::from_attributes([Attribute::new(3)]);
        let item = Item::new("Nordholm", attrs, vec![4, 2], SizeTier::Medium);
        assert_eq!(item.name(), "Nordholm");
        assert!(item.has(Attribute::new(3)));
        assert!(!item.has(Attribute::new(0)));
        assert_eq!(item.slots(), &[4, 2]);
        assert_eq!(item.to_string(), "Nordholm");
    }
}
