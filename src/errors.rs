//! Errors for grid access and puzzle generation.

/// Error for grid construction, unit access and placement checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Unit accessor index outside `0..=8`.
    #[error("unit index {0} is outside the range 0..=8")]
    UnitIndexOutOfBounds(usize),
    /// Cell coordinate outside the 9x9 board.
    #[error("cell ({0}, {1}) is outside the 9x9 grid")]
    CellOutOfBounds(usize, usize),
    /// Digit outside `1..=9` passed to a placement or legality check.
    #[error("digit {0} is outside the range 1..=9")]
    DigitOutOfRange(u8),
    /// A matrix literal contains a value outside `0..=9`.
    #[error("value {value} at ({row}, {col}) is outside the range 0..=9")]
    ValueOutOfRange {
        /// Row of the offending value.
        row: usize,
        /// Column of the offending value.
        col: usize,
        /// The out-of-range value itself.
        value: u8,
    },
}

/// Error for malformed puzzle generation requests.
///
/// Exhaustion of removable cells is not an error; generation then simply
/// removes fewer cells than requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Difficulty label not in the recognized set.
    #[error("unknown difficulty `{0}`, expected one of: easy, medium, hard, expert")]
    UnknownDifficulty(String),
    /// Explicit removal target outside `1..=81`.
    #[error("removal target {0} is outside the range 1..=81")]
    TargetOutOfRange(u8),
    /// Both a removal target and a difficulty level were supplied.
    #[error("a removal target and a difficulty level were both supplied")]
    ConflictingRequest,
    /// Neither a removal target nor a difficulty level was supplied.
    #[error("neither a removal target nor a difficulty level was supplied")]
    MissingRequest,
}
