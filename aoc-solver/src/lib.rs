//! Advent of Code Solver Engine
//!
//! Maps every `(day, part)` of the calendar to a routine that fetches the
//! puzzle description and input from a [`PuzzleSource`], parses the input and
//! computes a single textual answer.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining parsers and part solvers
//! - An immutable [`DispatchTable`] built once at startup, with a generic
//!   fallback bound to every key that has no specific routine
//! - The [`PuzzleSource`] contract consumed by routines
//! - Failure isolation: fetch, parse, solve errors and panics become a
//!   degraded [`PuzzleResult`] instead of propagating to the caller
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, DispatchTableBuilder, InMemorySource, ParseError, PartSolver, SolveError,
//!     SolveStatus,
//! };
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let table = DispatchTableBuilder::new()
//!     .register_part::<MyDay1, 1>(1)
//!     .unwrap()
//!     .build(InMemorySource::new().with_day(1, "Sum the numbers", "1\n2\n3"));
//!
//! let outcome = table.solve(1, 1);
//! assert_eq!(outcome.status, SolveStatus::Solved);
//! assert_eq!(outcome.result.answer(), "6");
//!
//! // Unregistered in-bounds keys answer with the generic placeholder
//! assert_eq!(table.solve(2, 1).status, SolveStatus::Generic);
//!
//! // Keys outside the calendar are not ok
//! assert!(!table.solve(26, 1).is_ok());
//! ```
//!
//! # Key Concepts
//!
//! ## Parsers and Part Solvers
//!
//! Implement [`AocParser`] once per day to define the parsed shape of the
//! input, then [`PartSolver<N>`] for each part. Parts share the parser, so a
//! day's parsing logic lives in one place.
//!
//! ## Dispatch Table
//!
//! [`DispatchTableBuilder`] collects explicit registrations. `build` binds the
//! generic fallback to every empty slot and returns a [`DispatchTable`] that
//! cannot be modified afterwards, so concurrent callers read it without locks.

mod error;
mod puzzle;
mod registry;
mod solver;
mod source;

// Re-export public API
pub use error::{BoxError, ParseError, RegistrationError, SolveError, SolverError};
pub use puzzle::{DAYS, PARTS, PuzzleResult, SolveOutcome, SolveStatus, SolverKey};
pub use registry::{BindingKind, CAPACITY, DispatchTable, DispatchTableBuilder, Routine};
pub use solver::{AocParser, PartSolver, parse_and_solve};
pub use source::{InMemorySource, PuzzleSource};
