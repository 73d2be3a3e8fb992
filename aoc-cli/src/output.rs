//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::SolveStatus;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    year: u16,
    quiet: bool,
    show_description: bool,
    show_input: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(year: u16, quiet: bool, show_description: bool, show_input: bool) -> Self {
        Self {
            year,
            quiet,
            show_description,
            show_input,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        let record = &result.outcome.result;
        match result.outcome.status {
            SolveStatus::Solved | SolveStatus::Generic => println!("{}", record.answer()),
            SolveStatus::Degraded | SolveStatus::Unregistered => {
                eprintln!("Error: {}", record.answer())
            }
        }
    }

    /// Print full output with timing
    fn print_full(&self, result: &SolverResult) {
        let record = &result.outcome.result;

        if self.show_description && !record.description().is_empty() {
            println!("{}\n", record.description());
        }

        let line = format_line(self.year, result);
        match result.outcome.status {
            SolveStatus::Solved | SolveStatus::Generic => println!("{}", line),
            SolveStatus::Degraded | SolveStatus::Unregistered => eprintln!("{}", line),
        }

        if self.show_input {
            println!("{}", record.input());
        }
    }

    /// Print a summary after all results
    ///
    /// Shows both the total solve time (sum of durations) and the elapsed
    /// wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Routines: {} solved, {} generic, {} degraded",
            summary.solved, summary.generic, summary.degraded
        );
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_solve_secs =
                summary.solve_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_solve_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Counts by status and the summed duration of solved results
#[derive(Debug, PartialEq)]
struct Summary {
    solved: usize,
    generic: usize,
    degraded: usize,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let empty = Self {
            solved: 0,
            generic: 0,
            degraded: 0,
            solve_time: TimeDelta::zero(),
        };
        results.iter().fold(empty, |mut summary, r| {
            match r.outcome.status {
                SolveStatus::Solved => {
                    summary.solved += 1;
                    summary.solve_time = summary.solve_time + r.outcome.duration();
                }
                SolveStatus::Generic => summary.generic += 1,
                SolveStatus::Degraded | SolveStatus::Unregistered => summary.degraded += 1,
            }
            summary
        })
    }
}

/// One result line: `YYYY/DD Part P: answer (solve: 1.23ms)`
fn format_line(year: u16, result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", year, result.key.day, result.key.part);
    let record = &result.outcome.result;
    let timing = format_duration(result.outcome.duration());

    match result.outcome.status {
        SolveStatus::Solved => format!("{}: {} (solve: {})", prefix, record.answer(), timing),
        SolveStatus::Generic => format!("{}: {} (no solver)", prefix, record.answer()),
        SolveStatus::Degraded | SolveStatus::Unregistered => {
            format!("{}: Error - {}", prefix, record.answer())
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{PuzzleResult, SolveOutcome, SolverKey};
    use chrono::Utc;

    fn result(day: u8, part: u8, status: SolveStatus, answer: &str, micros: i64) -> SolverResult {
        let start = Utc::now();
        SolverResult {
            key: SolverKey::new(day, part).unwrap(),
            outcome: SolveOutcome {
                result: PuzzleResult::new("desc", "input", answer),
                status,
                solve_start: start,
                solve_end: start + TimeDelta::microseconds(micros),
            },
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1230)), "1.23ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_format_line() {
        let solved = result(1, 2, SolveStatus::Solved, "13", 1230);
        assert_eq!(format_line(2024, &solved), "2024/01 Part 2: 13 (solve: 1.23ms)");

        let generic = result(7, 1, SolveStatus::Generic, "Generic Solution", 1);
        assert_eq!(format_line(2024, &generic), "2024/07 Part 1: Generic Solution (no solver)");

        let degraded = result(5, 2, SolveStatus::Degraded, "Solve error: cycle", 1);
        assert_eq!(format_line(2024, &degraded), "2024/05 Part 2: Error - Solve error: cycle");
    }

    #[test]
    fn test_summary_counts() {
        let results = [
            result(1, 1, SolveStatus::Solved, "11", 100),
            result(1, 2, SolveStatus::Solved, "13", 200),
            result(6, 1, SolveStatus::Generic, "Generic Solution", 50),
            result(5, 2, SolveStatus::Degraded, "boom", 70),
        ];
        assert_eq!(
            Summary::of(&results),
            Summary {
                solved: 2,
                generic: 1,
                degraded: 1,
                solve_time: TimeDelta::microseconds(300),
            }
        );
    }
}
