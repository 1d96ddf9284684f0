//! Fixed-size set of numbers in `1..=90`, backed by a `u128` bitmask

use serde::{Serialize, Serializer};

use crate::types::{Number, NUMBER_MAX, NUMBER_MIN};

/// Set of callable numbers. Insertion never allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumberSet {
    bits: u128,
}

impl NumberSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Insert `number`; returns `false` if it was already present or is
    /// outside `1..=90`.
    pub fn insert(&mut self, number: Number) -> bool {
        if !(NUMBER_MIN..=NUMBER_MAX).contains(&number) || self.contains(number) {
            return false;
        }
        self.bits |= 1u128 << number;
        true
    }

    pub fn contains(&self, number: Number) -> bool {
        number <= NUMBER_MAX && self.bits & (1u128 << number) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        (NUMBER_MIN..=NUMBER_MAX).filter(move |&n| self.contains(n))
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

impl FromIterator<Number> for NumberSet {
    fn from_iter<I: IntoIterator<Item = Number>>(iter: I) -> Self {
        let mut set = Self::new();
        for n in iter {
            set.insert(n);
        }
        set
    }
}

impl Serialize for NumberSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
