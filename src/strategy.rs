//! Logical placement techniques, the deduction-only alternative to search.
//!
//! The three techniques are applied in a fixed order of increasing deductive
//! cost; the order is part of the contract, which is why they live in a
//! const array rather than a map. The driver is incomplete by design: it
//! stops when a full rotation places nothing, and leaving empty cells behind
//! is a normal outcome signaling that brute force (or a human) has to take
//! over.

use crate::board::{Cell, DigitSet, Grid};

/// One of the three supported placement techniques.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Technique {
    /// The cell's full candidate set has exactly one member.
    NakedSingle,
    /// One of the cell's three units, filtered in isolation, leaves exactly
    /// one digit. Weaker than the combined filter on purpose; the per-unit
    /// narrowing is kept separate from [`NakedSingle`](Technique::NakedSingle).
    UnitSingle,
    /// A candidate digit occurs in both other rows and both other columns
    /// crossing the cell's block, pinning it to this cell.
    AdjacentUnitExclusion,
}

impl Technique {
    /// Application order within one rotation of the driver loop.
    pub const ORDER: [Technique; 3] = [
        Technique::NakedSingle,
        Technique::UnitSingle,
        Technique::AdjacentUnitExclusion,
    ];

    /// Human-readable technique name.
    pub fn name(self) -> &'static str {
        match self {
            Technique::NakedSingle => "naked single",
            Technique::UnitSingle => "unit single",
            Technique::AdjacentUnitExclusion => "adjacent unit exclusion",
        }
    }

    /// Tries to deduce and place a digit in `cell`. Returns whether a digit
    /// was written; occupied cells and failed deductions return `false`.
    pub fn apply(self, grid: &mut Grid, cell: Cell) -> bool {
        if !grid.is_cell_empty(cell) {
            return false;
        }
        match self {
            Technique::NakedSingle => naked_single(grid, cell),
            Technique::UnitSingle => unit_single(grid, cell),
            Technique::AdjacentUnitExclusion => adjacent_unit_exclusion(grid, cell),
        }
    }

    fn index(self) -> usize {
        match self {
            Technique::NakedSingle => 0,
            Technique::UnitSingle => 1,
            Technique::AdjacentUnitExclusion => 2,
        }
    }
}

fn naked_single(grid: &mut Grid, cell: Cell) -> bool {
    match grid.candidates(cell).unique() {
        Some(digit) => grid.populate_cell(cell, digit),
        None => false,
    }
}

fn unit_single(grid: &mut Grid, cell: Cell) -> bool {
    // each unit is filtered in isolation, block first, then row, then column
    let units = [
        grid.block_at(cell.block()),
        grid.row_at(cell.row()),
        grid.col_at(cell.col()),
    ];
    for values in units {
        if let Some(digit) = DigitSet::from_values(&values).missing().unique() {
            // the lone per-unit digit can still collide with another unit
            return grid.populate_cell(cell, digit);
        }
    }
    false
}

fn adjacent_unit_exclusion(grid: &mut Grid, cell: Cell) -> bool {
    let candidates = grid.candidates(cell);
    if candidates.is_empty() {
        return false;
    }

    let (corner_row, corner_col) = cell.block_corner();
    let adjacent_rows: Vec<DigitSet> = (corner_row..corner_row + 3)
        .filter(|&row| row != cell.row())
        .map(|row| DigitSet::from_values(&grid.row_at(row)))
        .collect();
    let adjacent_cols: Vec<DigitSet> = (corner_col..corner_col + 3)
        .filter(|&col| col != cell.col())
        .map(|col| DigitSet::from_values(&grid.col_at(col)))
        .collect();

    for digit in candidates {
        let pinned = adjacent_rows.iter().all(|values| values.contains(digit))
            && adjacent_cols.iter().all(|values| values.contains(digit));
        if pinned {
            return grid.populate_cell(cell, digit);
        }
    }
    false
}

/// Record of what one [`placement_techniques`] run achieved.
#[derive(Clone, Debug, Default)]
pub struct DeductionReport {
    placements: [Vec<Cell>; 3],
    rotations: usize,
    remaining_empty: usize,
}

impl DeductionReport {
    /// The cells solved by `technique`, in placement order.
    pub fn placements(&self, technique: Technique) -> &[Cell] {
        &self.placements[technique.index()]
    }

    /// Number of cells solved by `technique`.
    pub fn count(&self, technique: Technique) -> usize {
        self.placements[technique.index()].len()
    }

    /// Total number of cells solved across all techniques.
    pub fn total_placed(&self) -> usize {
        self.placements.iter().map(Vec::len).sum()
    }

    /// Number of full technique rotations that ran.
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Empty cells left when the driver stopped.
    pub fn remaining_empty(&self) -> usize {
        self.remaining_empty
    }

    /// Whether deduction alone completed the grid.
    pub fn is_solved(&self) -> bool {
        self.remaining_empty == 0
    }
}

/// Applies the three placement techniques in rotations until a rotation
/// places nothing or the grid is complete.
///
/// The empty-cell list is refreshed after every technique, since placements
/// shrink it mid-rotation.
pub fn placement_techniques(grid: &mut Grid) -> DeductionReport {
    let mut report = DeductionReport {
        remaining_empty: grid.count_empty_cells(),
        ..DeductionReport::default()
    };

    loop {
        let mut placement_made = false;

        for technique in Technique::ORDER {
            let empty_cells = grid.empty_cells();
            if empty_cells.is_empty() {
                break;
            }
            for cell in empty_cells {
                if technique.apply(grid, cell) {
                    report.placements[technique.index()].push(cell);
                    placement_made = true;
                }
            }
        }

        report.rotations += 1;
        report.remaining_empty = grid.count_empty_cells();
        if !placement_made || report.remaining_empty == 0 {
            break;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Digit;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn digit(digit: u8) -> Digit {
        Digit::new_checked(digit).unwrap()
    }

    #[test]
    fn naked_single_needs_a_singleton() {
        let mut grid = Grid::new();
        assert!(!Technique::NakedSingle.apply(&mut grid, cell(0, 0)));
    }

    #[test]
    fn unit_single_places_the_last_row_digit() {
        let mut matrix = [[0; 9]; 9];
        matrix[0] = [5, 6, 8, 9, 1, 3, 4, 2, 0];
        let mut grid = Grid::from_matrix(matrix).unwrap();
        assert!(Technique::UnitSingle.apply(&mut grid, cell(0, 8)));
        assert_eq!(grid.get(cell(0, 8)), Some(digit(7)));
    }

    #[test]
    fn unit_single_reports_failure_on_illegal_placement() {
        let mut matrix = [[0; 9]; 9];
        matrix[0] = [5, 6, 8, 9, 1, 3, 4, 2, 0];
        // the row is missing a 7, but the column already holds one
        matrix[5][8] = 7;
        let mut grid = Grid::from_matrix(matrix).unwrap();
        assert!(!Technique::UnitSingle.apply(&mut grid, cell(0, 8)));
        assert!(grid.is_cell_empty(cell(0, 8)));
    }

    #[test]
    fn occupied_cells_are_skipped() {
        let mut matrix = [[0; 9]; 9];
        matrix[0] = [5, 6, 8, 9, 1, 3, 4, 2, 7];
        let mut grid = Grid::from_matrix(matrix).unwrap();
        for technique in Technique::ORDER {
            assert!(!technique.apply(&mut grid, cell(0, 8)));
        }
    }

    #[test]
    fn technique_names() {
        assert_eq!(Technique::ORDER[0].name(), "naked single");
        assert_eq!(Technique::ORDER[2].name(), "adjacent unit exclusion");
    }
}
