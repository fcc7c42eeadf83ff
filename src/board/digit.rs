use std::num::NonZeroU8;

use crate::errors::GridError;

// defined separately from plain cell values because it has an offset:
// 0 is a valid cell value (empty) but not a valid digit
/// A digit that can be entered in a cell of the grid.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new_checked(idx + 1).unwrap()
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(|digit| Digit(NonZeroU8::new(digit).unwrap()))
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as `usize`, offset by `-1`, so that numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl TryFrom<u8> for Digit {
    type Error = GridError;

    fn try_from(digit: u8) -> Result<Self, GridError> {
        Self::new_checked(digit).ok_or(GridError::DigitOutOfRange(digit))
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
