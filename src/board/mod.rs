//! Types for cells, digits and the board itself
mod cell;
mod digit;
mod digit_set;
mod grid;

pub use self::{cell::Cell, digit::Digit, digit_set::DigitSet, grid::Grid};
