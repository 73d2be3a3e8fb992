//! Restores key order for results streamed from the executor
//!
//! Buffers results in two min-heaps:
//! - One for expected keys (what we're waiting for)
//! - One for received results (buffered until their turn)

use crate::executor::SolverResult;
use aoc_solver::SolverKey;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for min-heap ordering of SolverResult by key
struct OrderedResult(SolverResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the smallest key sits on top
        other.0.key.cmp(&self.0.key)
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        self.0.key == other.0.key
    }
}

/// Aggregator that buffers results and emits them in key order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<SolverKey>>,
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create aggregator from the keys that will be reported
    pub fn new(expected_keys: &[SolverKey]) -> Self {
        Self {
            expected: expected_keys.iter().copied().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if top_pending.0.key != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Drain remaining results in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| r.key);
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{PuzzleResult, SolveOutcome, SolveStatus};
    use chrono::Utc;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> SolverKey {
        SolverKey::new(day, part).unwrap()
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        let now = Utc::now();
        SolverResult {
            key: key(day, part),
            outcome: SolveOutcome {
                result: PuzzleResult::new("", "", format!("{}_{}", day, part)),
                status: SolveStatus::Solved,
                solve_start: now,
                solve_end: now,
            },
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<SolverKey> {
        results.iter().map(|r| r.key).collect()
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(&[key(1, 1), key(1, 2)]);

        let ready = agg.add(make_result(1, 1));
        assert_eq!(keys_of(&ready), vec![key(1, 1)]);

        let ready = agg.add(make_result(1, 2));
        assert_eq!(keys_of(&ready), vec![key(1, 2)]);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new(&[key(1, 1), key(1, 2), key(2, 1)]);

        // Waiting for day 1 part 1
        assert!(agg.add(make_result(1, 2)).is_empty());
        assert!(agg.add(make_result(2, 1)).is_empty());

        let ready = agg.add(make_result(1, 1));
        assert_eq!(keys_of(&ready), vec![key(1, 1), key(1, 2), key(2, 1)]);
        assert_eq!(ready[2].outcome.result.answer(), "2_1");
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(&[key(1, 1), key(1, 2)]);

        agg.add(make_result(1, 2));
        assert!(!agg.is_complete());

        let remaining = agg.drain();
        assert_eq!(keys_of(&remaining), vec![key(1, 2)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_any_arrival_order_emits_sorted(
            order in Just(SolverKey::all().collect::<Vec<_>>()).prop_shuffle()
        ) {
            let expected: Vec<SolverKey> = SolverKey::all().collect();
            let mut agg = ResultAggregator::new(&order);

            let mut emitted = Vec::new();
            for k in &order {
                emitted.extend(agg.add(make_result(k.day, k.part)));
            }

            prop_assert!(agg.is_complete());
            prop_assert_eq!(keys_of(&emitted), expected);
        }
    }
}
