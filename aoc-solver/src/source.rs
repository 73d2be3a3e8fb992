//! Puzzle source contract

use crate::error::BoxError;
use std::collections::HashMap;
use std::sync::Arc;

/// Provider of puzzle descriptions and raw puzzle inputs
///
/// Routines call both operations for their day before parsing. Any error
/// returned here is recovered by the dispatch table and surfaced as a
/// degraded result, so implementations are free to fail on transport
/// problems without retrying.
pub trait PuzzleSource: Send + Sync {
    /// Fetch the human-readable puzzle text for a day
    fn fetch_description(&self, day: u8) -> Result<String, BoxError>;

    /// Fetch the raw puzzle input for a day
    fn fetch_input(&self, day: u8) -> Result<String, BoxError>;
}

impl<S: PuzzleSource + ?Sized> PuzzleSource for Arc<S> {
    fn fetch_description(&self, day: u8) -> Result<String, BoxError> {
        (**self).fetch_description(day)
    }

    fn fetch_input(&self, day: u8) -> Result<String, BoxError> {
        (**self).fetch_input(day)
    }
}

impl<S: PuzzleSource + ?Sized> PuzzleSource for Box<S> {
    fn fetch_description(&self, day: u8) -> Result<String, BoxError> {
        (**self).fetch_description(day)
    }

    fn fetch_input(&self, day: u8) -> Result<String, BoxError> {
        (**self).fetch_input(day)
    }
}

/// Puzzle source backed by strings held in memory
///
/// Days that were never added fail to fetch.
///
/// # Example
///
/// ```
/// use aoc_solver::{InMemorySource, PuzzleSource};
///
/// let source = InMemorySource::new().with_day(1, "Day 1", "3   4\n4   3");
/// assert_eq!(source.fetch_input(1).unwrap(), "3   4\n4   3");
/// assert!(source.fetch_input(2).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    days: HashMap<u8, (String, String)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the description and input for a day
    pub fn with_day(
        mut self,
        day: u8,
        description: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        self.days.insert(day, (description.into(), input.into()));
        self
    }

    fn lookup(&self, day: u8) -> Result<&(String, String), BoxError> {
        self.days
            .get(&day)
            .ok_or_else(|| format!("no puzzle data for day {}", day).into())
    }
}

impl PuzzleSource for InMemorySource {
    fn fetch_description(&self, day: u8) -> Result<String, BoxError> {
        self.lookup(day).map(|(description, _)| description.clone())
    }

    fn fetch_input(&self, day: u8) -> Result<String, BoxError> {
        self.lookup(day).map(|(_, input)| input.clone())
    }
}
