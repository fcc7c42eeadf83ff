//! Puzzle generation by uniqueness-preserving cell removal.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Grid;
use crate::errors::GenerateError;
use crate::solver::{self, Solver};

/// Difficulty label of a generated puzzle, mapping to a closed range of how
/// many of the 81 cells get blanked out.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Difficulty {
    /// 45 to 49 removed cells.
    Easy,
    /// 50 to 54 removed cells.
    Medium,
    /// 55 to 58 removed cells.
    Hard,
    /// 59 to 64 removed cells.
    Expert,
}

impl Difficulty {
    /// All recognized difficulty levels, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// The number of cells to blank out of 81, as a closed range.
    pub fn removal_range(self) -> RangeInclusive<u8> {
        match self {
            Difficulty::Easy => 45..=49,
            Difficulty::Medium => 50..=54,
            Difficulty::Hard => 55..=58,
            Difficulty::Expert => 59..=64,
        }
    }

    /// The lowercase label recognized by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GenerateError;

    fn from_str(label: &str) -> Result<Self, GenerateError> {
        match label {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(GenerateError::UnknownDifficulty(label.to_string())),
        }
    }
}

/// Turns full grids into puzzles by removing cells while a unique solution
/// remains.
///
/// All random choices (target count within the difficulty range, removal
/// candidate order, digit orderings during filling) are drawn from the
/// injected random number generator.
pub struct Generator<R: Rng = ThreadRng> {
    rng: R,
}

impl Generator<ThreadRng> {
    /// Creates a generator backed by the thread-local random number generator.
    pub fn new() -> Self {
        Generator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Generator::new()
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing its random choices from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Generator { rng }
    }

    /// Produces a fully solved random grid.
    pub fn filled_grid(&mut self) -> Grid {
        let mut grid = Grid::new();
        let filled = Solver::with_rng(&mut self.rng).fill(&mut grid);
        debug_assert!(filled);
        grid
    }

    /// Removes cells according to exactly one of `target` and `difficulty`.
    /// Supplying both, or neither, is an input error. Returns the number of
    /// cells actually removed.
    pub fn generate_puzzle(
        &mut self,
        grid: &mut Grid,
        target: Option<u8>,
        difficulty: Option<Difficulty>,
    ) -> Result<usize, GenerateError> {
        match (target, difficulty) {
            (Some(_), Some(_)) => Err(GenerateError::ConflictingRequest),
            (None, None) => Err(GenerateError::MissingRequest),
            (Some(target), None) => self.remove_target(grid, target),
            (None, Some(difficulty)) => Ok(self.remove_cells(grid, difficulty)),
        }
    }

    /// Removes a number of cells drawn from the difficulty's range, keeping
    /// each removal only if the grid still has a unique solution. Returns
    /// the number of cells actually removed, which falls short of the drawn
    /// target when the removal candidates are exhausted first.
    pub fn remove_cells(&mut self, grid: &mut Grid, difficulty: Difficulty) -> usize {
        let target = self.rng.gen_range(difficulty.removal_range());
        self.remove(grid, target)
    }

    /// Like [`remove_cells`](Generator::remove_cells), with an explicit
    /// removal target in `1..=81` instead of a difficulty label.
    pub fn remove_target(&mut self, grid: &mut Grid, target: u8) -> Result<usize, GenerateError> {
        if target == 0 || target > 81 {
            return Err(GenerateError::TargetOutOfRange(target));
        }
        Ok(self.remove(grid, target))
    }

    fn remove(&mut self, grid: &mut Grid, target: u8) -> usize {
        let mut candidates = grid.filled_cells();
        candidates.shuffle(&mut self.rng);

        let mut removed = 0;
        for cell in candidates {
            if removed == target as usize {
                break;
            }
            let digit = match grid.get(cell) {
                Some(digit) => digit,
                None => continue,
            };
            grid.reset_cell(cell);
            if solver::is_solution_unique(grid) {
                removed += 1;
            } else {
                // this cell carries information; put it back
                let restored = grid.populate_cell(cell, digit);
                debug_assert!(restored);
            }
        }
        removed
    }
}
