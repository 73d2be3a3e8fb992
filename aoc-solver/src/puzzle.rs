//! Puzzle keys, results and dispatch outcomes

use crate::error::SolverError;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;
use std::ops::RangeInclusive;

/// Days of the calendar that can be dispatched
pub const DAYS: RangeInclusive<u8> = 1..=25;
/// Parts of each day that can be dispatched
pub const PARTS: RangeInclusive<u8> = 1..=2;

/// Identity of a routine: a day and one of its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolverKey {
    /// The day number (1-25)
    pub day: u8,
    /// The part number (1-2)
    pub part: u8,
}

impl SolverKey {
    /// Create a key, returning None if the day or part is out of bounds
    pub fn new(day: u8, part: u8) -> Option<Self> {
        (DAYS.contains(&day) && PARTS.contains(&part)).then_some(Self { day, part })
    }

    /// Iterate every in-bounds key in (day, part) order
    pub fn all() -> impl Iterator<Item = SolverKey> {
        DAYS.flat_map(|day| PARTS.map(move |part| SolverKey { day, part }))
    }

    /// Flat slot index of this key
    pub(crate) fn index(&self) -> usize {
        (self.day - DAYS.start()) as usize * PARTS.len() + (self.part - PARTS.start()) as usize
    }
}

impl fmt::Display for SolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:02} part {}", self.day, self.part)
    }
}

/// The record produced by every routine invocation
///
/// Holds the puzzle description, the raw input the answer was computed from,
/// and the answer itself. When a routine fails, the same record carries
/// diagnostic text instead (see [`PuzzleResult::degraded`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleResult {
    description: String,
    input: String,
    answer: String,
}

impl PuzzleResult {
    pub fn new(
        description: impl Into<String>,
        input: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            answer: answer.into(),
        }
    }

    /// Placeholder bound to every key without a specific routine
    pub fn generic(key: SolverKey) -> Self {
        Self::new(
            format!("Generic Puzzle Text for Day {}, Part {}", key.day, key.part),
            "Generic Input",
            "Generic Solution",
        )
    }

    /// Result for a key that has no slot in the table
    pub fn unregistered() -> Self {
        Self::new("No solution available", "No input", "No answer")
    }

    /// Diagnostic result for a routine that failed
    pub fn degraded(day: u8, part: u8, error: &SolverError) -> Self {
        Self::new(
            format!("Error solving day {}, part {}", day, part),
            "Error",
            error.to_string(),
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// How a dispatched request was fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A specific routine computed the answer
    Solved,
    /// The generic fallback answered
    Generic,
    /// The routine failed and a degraded result was produced
    Degraded,
    /// The key is outside the table
    Unregistered,
}

/// Result of [`DispatchTable::solve`](crate::DispatchTable::solve), including timing
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The produced record
    pub result: PuzzleResult,
    /// How the record was produced
    pub status: SolveStatus,
    /// When dispatch started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When dispatch completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveOutcome {
    /// False only when no routine was registered for the key
    pub fn is_ok(&self) -> bool {
        self.status != SolveStatus::Unregistered
    }

    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bounds() {
        assert!(SolverKey::new(1, 1).is_some());
        assert!(SolverKey::new(25, 2).is_some());
        assert!(SolverKey::new(0, 1).is_none());
        assert!(SolverKey::new(26, 1).is_none());
        assert!(SolverKey::new(1, 0).is_none());
        assert!(SolverKey::new(1, 3).is_none());
    }

    #[test]
    fn test_all_keys_have_distinct_slots() {
        let indices: Vec<usize> = SolverKey::all().map(|k| k.index()).collect();
        assert_eq!(indices, (0..50usize).collect::<Vec<_>>());
    }

    #[test]
    fn test_generic_text() {
        let key = SolverKey::new(7, 2).unwrap();
        let result = PuzzleResult::generic(key);
        assert_eq!(result.description(), "Generic Puzzle Text for Day 7, Part 2");
        assert_eq!(result.input(), "Generic Input");
        assert_eq!(result.answer(), "Generic Solution");
    }

    #[test]
    fn test_degraded_carries_error_message() {
        let error = SolverError::Panicked("boom".to_string());
        let result = PuzzleResult::degraded(3, 1, &error);
        assert_eq!(result.description(), "Error solving day 3, part 1");
        assert_eq!(result.input(), "Error");
        assert_eq!(result.answer(), "Routine panicked: boom");
    }
}
