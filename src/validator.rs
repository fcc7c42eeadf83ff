//! Placement legality and whole-grid consistency checks.
//!
//! A unit (row, column or block) is invalid iff it contains the same nonzero
//! digit twice. [`is_grid_valid`] answers the boolean question with an early
//! exit; [`check_grid`] is the diagnostic variant that reports every invalid
//! unit together with its contents.

use crate::board::{Cell, Digit, DigitSet, Grid};
use crate::errors::GridError;

/// Identifies one of the 27 units of the grid.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Unit {
    /// Row `0..=8`, top to bottom.
    Row(usize),
    /// Column `0..=8`, left to right.
    Col(usize),
    /// Block `0..=8`, row-major.
    Block(usize),
}

/// A rule-violating unit together with its contents.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InvalidUnit {
    /// Which unit is violated.
    pub unit: Unit,
    /// The unit's 9 values at the time of the check.
    pub values: [u8; 9],
}

/// Diagnostic result of a whole-grid scan, listing every invalid unit.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct GridReport {
    /// The invalid units, in row/column/block scan order.
    pub invalid_units: Vec<InvalidUnit>,
}

impl GridReport {
    /// Whether the scan found no rule violations.
    pub fn is_valid(&self) -> bool {
        self.invalid_units.is_empty()
    }
}

/// Whether placing `digit` at `cell` would violate no unit constraint.
/// Does not consider whether the cell is already occupied.
pub fn is_placement_legal(grid: &Grid, cell: Cell, digit: Digit) -> bool {
    !grid.containing_values(cell).contains(digit)
}

/// Raw-index variant of [`is_placement_legal`] that surfaces coordinate and
/// digit range errors instead of requiring pre-validated types.
pub fn check_placement(grid: &Grid, row: usize, col: usize, digit: u8) -> Result<bool, GridError> {
    let cell = Cell::new(row, col)?;
    let digit = Digit::try_from(digit)?;
    Ok(is_placement_legal(grid, cell, digit))
}

/// Whether `values` contains no nonzero digit twice.
pub fn is_unit_valid(values: [u8; 9]) -> bool {
    let mut seen = DigitSet::NONE;
    for value in values {
        if let Some(digit) = Digit::new_checked(value) {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
    }
    true
}

// scan order is rows, then columns, then blocks
fn units(grid: &Grid) -> impl Iterator<Item = (Unit, [u8; 9])> + '_ {
    let rows = (0..9).map(move |index| (Unit::Row(index), grid.row_at(index)));
    let cols = (0..9).map(move |index| (Unit::Col(index), grid.col_at(index)));
    let blocks = (0..9).map(move |index| (Unit::Block(index), grid.block_at(index)));
    rows.chain(cols).chain(blocks)
}

/// Whether every row, column and block of the grid is valid.
pub fn is_grid_valid(grid: &Grid) -> bool {
    units(grid).all(|(_, values)| is_unit_valid(values))
}

/// Scans all 27 units and reports the invalid ones.
pub fn check_grid(grid: &Grid) -> GridReport {
    GridReport {
        invalid_units: units(grid)
            .filter(|&(_, values)| !is_unit_valid(values))
            .map(|(unit, values)| InvalidUnit { unit, values })
            .collect(),
    }
}
