use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::Digit;

/// A set of digits `1..=9`, stored as a bitmask.
///
/// This is the representation of candidate sets: the digits still possible
/// for an empty cell, or the digits present in a unit.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);
    /// The set of all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Collects the nonzero entries of a unit into a set. Zeros (empty cells) are skipped.
    pub fn from_values(values: &[u8]) -> Self {
        values
            .iter()
            .filter_map(|&value| Digit::new_checked(value))
            .collect()
    }

    fn bit(digit: Digit) -> u16 {
        1 << digit.as_index()
    }

    /// Whether `digit` is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Number of digits in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set contains no digits.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The sole member of the set, if it has exactly one.
    pub fn unique(self) -> Option<Digit> {
        if self.len() == 1 {
            Some(Digit::from_index(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// The digits of `1..=9` not in the set.
    pub fn missing(self) -> DigitSet {
        DigitSet(!self.0 & Self::ALL.0)
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, other: Self) -> Self {
        DigitSet(self.0 & other.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(index))
    }
}
