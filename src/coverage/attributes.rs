//! Attribute flags and fixed-universe bitmask sets.

use super::weights::ScoringError;
use std::fmt;
use std::ops::{BitOr, Sub};

/// Maximum number of flags a single universe can hold.
pub const MAX_ATTRIBUTES: usize = 64;

/// Index of one flag within an [`AttributeUniverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Attribute(u8);

impl Attribute {
    /// Creates an attribute from its universe index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_ATTRIBUTES`.
    pub const fn new(index: usize) -> Self {
        assert!(index < MAX_ATTRIBUTES, "attribute index out of range");
        Attribute(index as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    const fn bit(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A subset of an attribute universe, stored as a bitmask.
///
/// Membership, union and difference are all O(1).
///
/// # Examples
///
/// ```
/// use isle_anneal::coverage::{Attribute, AttributeSet};
///
/// let x = Attribute::new(0);
/// let y = Attribute::new(1);
/// let both = AttributeSet::from_attributes([x, y]);
/// let rest = both - AttributeSet::from_attributes([x]);
/// assert!(rest.contains(y));
/// assert!(!rest.contains(x));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet(u64);

impl AttributeSet {
    pub const fn empty() -> Self {
        AttributeSet(0)
    }

    /// Set containing the first `n` attributes of a universe.
    pub const fn first(n: usize) -> Self {
        if n >= MAX_ATTRIBUTES {
            AttributeSet(u64::MAX)
        } else {
            AttributeSet((1u64 << n) - 1)
        }
    }

    pub fn from_attributes<I: IntoIterator<Item = Attribute>>(attrs: I) -> Self {
        attrs.into_iter().fold(Self::empty(), |acc, a| acc.with(a))
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn with(self, attr: Attribute) -> Self {
        AttributeSet(self.0 | attr.bit())
    }

    #[inline]
    pub fn insert(&mut self, attr: Attribute) {
        self.0 |= attr.bit();
    }

    #[inline]
    pub fn remove(&mut self, attr: Attribute) {
        self.0 &= !attr.bit();
    }

    #[inline]
    pub const fn contains(self, attr: Attribute) -> bool {
        self.0 & attr.bit() != 0
    }

    /// Returns `true` if every member of `other` is also in `self`.
    #[inline]
    pub const fn contains_all(self, other: AttributeSet) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: AttributeSet) -> Self {
        AttributeSet(self.0 | other.0)
    }

    #[inline]
    pub const fn difference(self, other: AttributeSet) -> Self {
        AttributeSet(self.0 & !other.0)
    }

    #[inline]
    pub const fn intersection(self, other: AttributeSet) -> Self {
        AttributeSet(self.0 & other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Attribute> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(Attribute(idx))
        })
    }
}

impl BitOr for AttributeSet {
    type Output = AttributeSet;

    fn bitor(self, rhs: AttributeSet) -> AttributeSet {
        self.union(rhs)
    }
}

impl Sub for AttributeSet {
    type Output = AttributeSet;

    fn sub(self, rhs: AttributeSet) -> AttributeSet {
        self.difference(rhs)
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        AttributeSet::from_attributes(iter)
    }
}

/// An ordered, named catalog of attribute flags.
///
/// The position of a name is its [`Attribute`] index, which is also the
/// column order used by record files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeUniverse {
    names: Vec<String>,
}

impl AttributeUniverse {
    /// Builds a universe from flag names in index order.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, ScoringError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > MAX_ATTRIBUTES {
            return Err(ScoringError::UniverseTooLarge(names.len()));
        }
        Ok(Self { names })
    }

    /// Builds a universe from names known to fit.
    pub(crate) fn from_static(names: &[&str]) -> Self {
        debug_assert!(names.len() <= MAX_ATTRIBUTES);
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, attr: Attribute) -> Option<&str> {
        self.names.get(attr.index()).map(String::as_str)
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(&self, name: &str) -> Option<Attribute> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(Attribute::new)
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        (0..self.names.len()).map(Attribute::new)
    }

    /// Every flag of the universe.
    pub fn all(&self) -> AttributeSet {
        AttributeSet::first(self.names.len())
    }

    /// Resolves a list of names into a set.
    pub fn set_of(&self, names: &[&str]) -> Result<AttributeSet, ScoringError> {
        names
            .iter()
            .map(|n| {
                self.lookup(n)
                    .ok_or_else(|| ScoringError::UnknownAttribute((*n).to_string()))
            })
            .collect()
    }

    /// Renders a set as a comma-separated list of names.
    pub fn describe(&self, set: AttributeSet) -> String {
        set.iter()
            .map(|a| self.name(a).map_or_else(|| a.to_string(), str::to_string))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
