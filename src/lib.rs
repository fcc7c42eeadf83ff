#![warn(missing_docs)]
//! Create, solve and reduce 9x9 sudoku puzzles.
//!
//! ## Overview
//!
//! The crate is built around a plain [`Grid`] whose only mutation surface is
//! legality-checked cell placement. On top of it sit a backtracking
//! [`Solver`] (filling, capped solution counting, uniqueness checks), a
//! deduction-only solver applying three human-style placement
//! [techniques](strategy), and a [`Generator`] that reduces a full grid to a
//! puzzle of a requested [`Difficulty`] without ever breaking solution
//! uniqueness.
//!
//! The crate performs no I/O; rendering belongs to the caller, which can get
//! at the raw cell values through [`Grid::to_matrix`].
//!
//! ## Example
//!
//! ```
//! use sudoku_forge::{solver, Difficulty, Generator};
//!
//! let mut generator = Generator::new();
//!
//! // a fully solved random grid...
//! let mut grid = generator.filled_grid();
//!
//! // ...reduced to a puzzle with exactly one completion
//! let removed = generator.remove_cells(&mut grid, Difficulty::Easy);
//! assert!(removed <= 49);
//! assert_eq!(grid.count_empty_cells(), removed);
//! assert!(solver::is_solution_unique(&mut grid));
//! ```

pub mod board;
pub mod errors;
mod generator;
pub mod solver;
pub mod strategy;
pub mod validator;

pub use crate::board::{Cell, Digit, DigitSet, Grid};
pub use crate::errors::{GenerateError, GridError};
pub use crate::generator::{Difficulty, Generator};
pub use crate::solver::Solver;
pub use crate::strategy::{placement_techniques, DeductionReport, Technique};
pub use crate::validator::{GridReport, InvalidUnit, Unit};
