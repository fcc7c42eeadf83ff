use crate::errors::GridError;

/// A (row, column) coordinate on the board, both components in `0..=8`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Constructs a new `Cell`, rejecting coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, GridError> {
        if row > 8 || col > 8 {
            return Err(GridError::CellOutOfBounds(row, col));
        }
        Ok(Cell {
            row: row as u8,
            col: col as u8,
        })
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 81);
        Cell {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::from_index)
    }

    /// The row component.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// The column component.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Index of the 3x3 block containing this cell, `0..=8` in row-major order.
    pub fn block(self) -> usize {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// Top-left coordinate of the containing block.
    pub(crate) fn block_corner(self) -> (usize, usize) {
        (self.row() / 3 * 3, self.col() / 3 * 3)
    }

    pub(crate) fn as_index(self) -> usize {
        self.row() * 9 + self.col()
    }
}
