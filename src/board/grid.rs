use std::fmt;

use super::{Cell, Digit, DigitSet};
use crate::errors::GridError;

/// The 9x9 board, stored row-major. A value of `0` marks an empty cell.
///
/// The inner array is private; the only way to change a filled cell is
/// [`reset_cell`](Grid::reset_cell), and the only way to fill an empty one is
/// [`populate_cell`](Grid::populate_cell), which rejects digits already
/// present in the cell's row, column or block. Every grid reachable through
/// this surface from a valid starting grid stays valid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid([u8; 81]);

impl Grid {
    /// Creates an all-empty grid.
    pub fn new() -> Self {
        Grid([0; 81])
    }

    /// Creates a grid from a 9x9 matrix of digits, `0` meaning empty.
    ///
    /// Values are checked to be in `0..=9`; rule violations (duplicate digits
    /// in a unit) are accepted here and reported by
    /// [`validator::check_grid`](crate::validator::check_grid).
    pub fn from_matrix(matrix: [[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut cells = [0; 81];
        for (row, row_values) in matrix.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::ValueOutOfRange { row, col, value });
                }
                cells[row * 9 + col] = value;
            }
        }
        Ok(Grid(cells))
    }

    /// Returns the raw cell values as a 9x9 matrix, for external rendering.
    pub fn to_matrix(&self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for (row, row_values) in matrix.iter_mut().enumerate() {
            row_values.copy_from_slice(&self.0[row * 9..row * 9 + 9]);
        }
        matrix
    }

    /// The 9 values of row `index`, left to right.
    pub fn row(&self, index: usize) -> Result<[u8; 9], GridError> {
        if index > 8 {
            return Err(GridError::UnitIndexOutOfBounds(index));
        }
        Ok(self.row_at(index))
    }

    /// The 9 values of column `index`, top to bottom.
    pub fn col(&self, index: usize) -> Result<[u8; 9], GridError> {
        if index > 8 {
            return Err(GridError::UnitIndexOutOfBounds(index));
        }
        Ok(self.col_at(index))
    }

    /// The 9 values of the block containing `(row, col)`, in row-major order.
    pub fn block(&self, row: usize, col: usize) -> Result<[u8; 9], GridError> {
        let cell = Cell::new(row, col)?;
        Ok(self.block_at(cell.block()))
    }

    pub(crate) fn row_at(&self, index: usize) -> [u8; 9] {
        debug_assert!(index < 9);
        let mut values = [0; 9];
        values.copy_from_slice(&self.0[index * 9..index * 9 + 9]);
        values
    }

    pub(crate) fn col_at(&self, index: usize) -> [u8; 9] {
        debug_assert!(index < 9);
        let mut values = [0; 9];
        for (row, value) in values.iter_mut().enumerate() {
            *value = self.0[row * 9 + index];
        }
        values
    }

    pub(crate) fn block_at(&self, block: usize) -> [u8; 9] {
        debug_assert!(block < 9);
        let corner = block / 3 * 27 + block % 3 * 3;
        let mut values = [0; 9];
        for minirow in 0..3 {
            for minicol in 0..3 {
                values[minirow * 3 + minicol] = self.0[corner + minirow * 9 + minicol];
            }
        }
        values
    }

    /// The digit at `cell`, or `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Whether `cell` holds no digit.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.0[cell.as_index()] == 0
    }

    /// The union of the digits in the cell's row, column and block.
    pub fn containing_values(&self, cell: Cell) -> DigitSet {
        DigitSet::from_values(&self.row_at(cell.row()))
            | DigitSet::from_values(&self.col_at(cell.col()))
            | DigitSet::from_values(&self.block_at(cell.block()))
    }

    /// The digits still possible for `cell`: `{1..9}` minus its containing values.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.containing_values(cell).missing()
    }

    /// Writes `digit` into `cell` if the cell is empty and the digit does not
    /// yet occur in any of the cell's three units. Returns whether the write
    /// happened.
    pub fn populate_cell(&mut self, cell: Cell, digit: Digit) -> bool {
        if !self.is_cell_empty(cell) || self.containing_values(cell).contains(digit) {
            return false;
        }
        self.0[cell.as_index()] = digit.get();
        true
    }

    /// Empties `cell`.
    pub fn reset_cell(&mut self, cell: Cell) {
        self.0[cell.as_index()] = 0;
    }

    /// Number of empty cells on the board.
    pub fn count_empty_cells(&self) -> usize {
        self.0.iter().filter(|&&value| value == 0).count()
    }

    /// The first empty cell in row-major order, or `None` on a full board.
    pub fn next_empty_cell(&self) -> Option<Cell> {
        self.0
            .iter()
            .position(|&value| value == 0)
            .map(Cell::from_index)
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.is_cell_empty(cell)).collect()
    }

    /// All filled cells in row-major order. These are the removal candidates
    /// during puzzle generation.
    pub fn filled_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| !self.is_cell_empty(cell)).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &value) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if row != 0 => writeln!(f)?,
                _ => {}
            }
            match value {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GridVisitor;

        impl<'de> serde::de::Visitor<'de> for GridVisitor {
            type Value = Grid;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of 81 cell values in 0..=9")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Grid, A::Error> {
                use serde::de::Error;

                let mut cells = [0; 81];
                for (index, slot) in cells.iter_mut().enumerate() {
                    let value: u8 = seq
                        .next_element()?
                        .ok_or_else(|| A::Error::invalid_length(index, &self))?;
                    if value > 9 {
                        return Err(A::Error::custom(format!(
                            "cell value {} is outside the range 0..=9",
                            value
                        )));
                    }
                    *slot = value;
                }
                Ok(Grid(cells))
            }
        }

        deserializer.deserialize_seq(GridVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.count_empty_cells(), 81);
        assert_eq!(grid.next_empty_cell(), Some(cell(0, 0)));
    }

    #[test]
    fn from_matrix_rejects_out_of_range_values() {
        let mut matrix = [[0; 9]; 9];
        matrix[2][7] = 10;
        assert_eq!(
            Grid::from_matrix(matrix),
            Err(GridError::ValueOutOfRange {
                row: 2,
                col: 7,
                value: 10
            })
        );
    }

    #[test]
    fn unit_accessors_check_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.row(9), Err(GridError::UnitIndexOutOfBounds(9)));
        assert_eq!(grid.col(10), Err(GridError::UnitIndexOutOfBounds(10)));
        assert_eq!(grid.block(9, 0), Err(GridError::CellOutOfBounds(9, 0)));
    }

    #[test]
    fn populate_respects_units() {
        let mut grid = Grid::new();
        let seven = Digit::new_checked(7).unwrap();
        assert!(grid.populate_cell(cell(4, 4), seven));
        // same row, column and block
        assert!(!grid.populate_cell(cell(4, 8), seven));
        assert!(!grid.populate_cell(cell(0, 4), seven));
        assert!(!grid.populate_cell(cell(3, 3), seven));
        // unrelated cell
        assert!(grid.populate_cell(cell(0, 0), seven));
        // occupied cell
        let one = Digit::new_checked(1).unwrap();
        assert!(!grid.populate_cell(cell(4, 4), one));
    }

    #[test]
    fn reset_reopens_cell() {
        let mut grid = Grid::new();
        let three = Digit::new_checked(3).unwrap();
        assert!(grid.populate_cell(cell(1, 1), three));
        grid.reset_cell(cell(1, 1));
        assert!(grid.is_cell_empty(cell(1, 1)));
        assert!(grid.populate_cell(cell(1, 1), three));
    }

    #[test]
    fn matrix_roundtrip() {
        let mut matrix = [[0; 9]; 9];
        matrix[0][0] = 5;
        matrix[8][8] = 9;
        let grid = Grid::from_matrix(matrix).unwrap();
        assert_eq!(grid.to_matrix(), matrix);
    }
}
