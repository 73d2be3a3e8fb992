//! Parallel executor for running dispatch table keys

use crate::error::ExecutorError;
use aoc_solver::{DispatchTable, SolveOutcome, SolverKey};
use rayon::prelude::*;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Outcome of one key, tagged with the key it answers
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub key: SolverKey,
    pub outcome: SolveOutcome,
}

/// Runs keys of a dispatch table on a dedicated rayon pool
pub struct Executor<'t> {
    table: &'t DispatchTable,
    thread_pool: rayon::ThreadPool,
}

impl<'t> Executor<'t> {
    pub fn new(table: &'t DispatchTable, thread_count: usize) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self { table, thread_pool })
    }

    /// Solve every key and send each result as soon as it is ready
    ///
    /// Results arrive in completion order; use
    /// [`ResultAggregator`](crate::aggregator::ResultAggregator) to restore key order.
    pub fn execute(&self, keys: &[SolverKey], tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        let table = self.table;
        debug!(keys = keys.len(), threads = self.thread_pool.current_num_threads(), "executing");

        self.thread_pool.install(|| {
            keys.par_iter().try_for_each_with(tx, |tx, &key| {
                let outcome = table.solve(key.day, key.part);
                tx.send(SolverResult { key, outcome })
                    .map_err(|_| ExecutorError::ChannelSend)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{DispatchTableBuilder, InMemorySource, PuzzleResult, SolveStatus};
    use std::sync::mpsc;

    fn table() -> DispatchTable {
        DispatchTableBuilder::new()
            .register_fn(2, 1, |key, source| {
                let input = source.fetch_input(key.day).map_err(|e| {
                    aoc_solver::SolverError::Fetch {
                        what: "input",
                        day: key.day,
                        source: e,
                    }
                })?;
                Ok(PuzzleResult::new("", input.clone(), input.len().to_string()))
            })
            .unwrap()
            .build(InMemorySource::new().with_day(2, "", "abcd"))
    }

    #[test]
    fn test_execute_solves_through_table() {
        let table = table();
        let executor = Executor::new(&table, 2).unwrap();
        let keys = [SolverKey::new(1, 1).unwrap(), SolverKey::new(2, 1).unwrap()];

        let (tx, rx) = mpsc::channel();
        executor.execute(&keys, tx).unwrap();

        let mut results: Vec<SolverResult> = rx.iter().collect();
        results.sort_by_key(|r| r.key);
        assert_eq!(results[0].outcome.status, SolveStatus::Generic);
        assert_eq!(results[1].outcome.status, SolveStatus::Solved);
        assert_eq!(results[1].outcome.result.answer(), "4");
        assert_eq!(results[1].outcome.result.input(), "abcd");
    }

    #[test]
    fn test_execute_sends_every_key() {
        let table = table();
        let executor = Executor::new(&table, 3).unwrap();
        let keys: Vec<SolverKey> = SolverKey::all().collect();

        let (tx, rx) = mpsc::channel();
        executor.execute(&keys, tx).unwrap();

        let mut got: Vec<SolverKey> = rx.iter().map(|r| r.key).collect();
        got.sort();
        assert_eq!(got, keys);
    }

    #[test]
    fn test_execute_reports_closed_channel() {
        let table = table();
        let executor = Executor::new(&table, 1).unwrap();
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let keys = [SolverKey::new(1, 1).unwrap()];
        assert!(matches!(executor.execute(&keys, tx), Err(ExecutorError::ChannelSend)));
    }
}
