//! Backtracking search: grid filling, solution counting and uniqueness.
//!
//! The search walks empty cells in row-major order, one recursion frame per
//! cell, so the depth is bounded by 81. Absence of a solution is a normal
//! `false`/zero-count outcome, never an error.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Digit, Grid};
use crate::validator;

/// Fills grids by randomized depth-first search.
///
/// The digit order tried at each cell is shuffled through the solver's random
/// number generator, which makes repeated fills of an empty grid produce
/// different boards. Tests inject a seeded generator via
/// [`with_rng`](Solver::with_rng) for reproducible runs.
pub struct Solver<R: Rng = ThreadRng> {
    rng: R,
}

impl Solver<ThreadRng> {
    /// Creates a solver backed by the thread-local random number generator.
    pub fn new() -> Self {
        Solver {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Solver<ThreadRng> {
    fn default() -> Self {
        Solver::new()
    }
}

impl<R: Rng> Solver<R> {
    /// Creates a solver drawing its digit orderings from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Solver { rng }
    }

    /// Fills every empty cell of the grid with a digit consistent with all
    /// unit constraints. Returns whether a full solution was reached; on
    /// `false` the grid is left as it was passed in.
    ///
    /// A grid that already violates unit constraints can never fill.
    pub fn fill(&mut self, grid: &mut Grid) -> bool {
        if !validator::is_grid_valid(grid) {
            return false;
        }
        self.fill_from(grid)
    }

    fn fill_from(&mut self, grid: &mut Grid) -> bool {
        let cell = match grid.next_empty_cell() {
            Some(cell) => cell,
            None => return true,
        };

        let mut digits: Vec<Digit> = Digit::all().collect();
        digits.shuffle(&mut self.rng);

        for &digit in &digits {
            if grid.populate_cell(cell, digit) {
                if self.fill_from(grid) {
                    return true;
                }
                grid.reset_cell(cell);
            }
        }
        false
    }
}

/// Counts the completions of the grid, stopping early once `cap` is reached.
///
/// Unlike [`Solver::fill`] the traversal backtracks past every complete
/// board to keep exploring sibling branches, so all completions up to `cap`
/// are registered. A fully-filled valid grid counts as exactly one solution
/// (itself); a grid violating unit constraints counts zero without any
/// search. The grid is restored to its input state before returning.
pub fn count_solutions(grid: &mut Grid, cap: usize) -> usize {
    if cap == 0 || !validator::is_grid_valid(grid) {
        return 0;
    }
    let mut count = 0;
    count_from(grid, cap, &mut count);
    count
}

fn count_from(grid: &mut Grid, cap: usize, count: &mut usize) {
    let cell = match grid.next_empty_cell() {
        Some(cell) => cell,
        None => {
            *count += 1;
            return;
        }
    };

    for digit in Digit::all() {
        if *count >= cap {
            break;
        }
        if grid.populate_cell(cell, digit) {
            count_from(grid, cap, count);
            grid.reset_cell(cell);
        }
    }
}

/// Whether the grid has exactly one completion.
///
/// An already-invalid grid is rejected without searching; otherwise this is
/// [`count_solutions`] with a cap of two.
pub fn is_solution_unique(grid: &mut Grid) -> bool {
    count_solutions(grid, 2) == 1
}
