//! Error types for the solver engine

use thiserror::Error;

/// Boxed error returned by a [`PuzzleSource`](crate::PuzzleSource) fetch
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The parsed input cannot produce an answer (e.g. contradictory rules)
    #[error("Unsolvable input: {0}")]
    Unsolvable(String),
    /// The answer does not fit the integer type it is computed in
    #[error("Answer overflows: {0}")]
    Overflow(String),
}

/// Error raised by a bound routine, caught at the dispatch boundary
#[derive(Debug, Error)]
pub enum SolverError {
    /// The puzzle source failed to provide the description or input
    #[error("Failed to fetch {what} for day {day}: {source}")]
    Fetch {
        /// Which document was requested ("description" or "input")
        what: &'static str,
        /// The day being fetched
        day: u8,
        /// The underlying transport error
        #[source]
        source: BoxError,
    },
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
    /// The routine panicked
    #[error("Routine panicked: {0}")]
    Panicked(String),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A different routine is already bound to this day/part
    #[error("Duplicate routine registration for day {0} part {1}")]
    DuplicateRoutine(u8, u8),
    /// Day or part outside the supported calendar
    #[error("Invalid key: day {0} part {1}")]
    InvalidKey(u8, u8),
}
