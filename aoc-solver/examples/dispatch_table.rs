//! Dispatch table with one solved day
//!
//! Registers a two-part solver for day 1, then asks the table for a solved
//! key, a generic key, a key whose routine fails, and a key outside the table.
//!
//! Run with: cargo run --example dispatch_table

use aoc_solver::{
    AocParser, DispatchTableBuilder, InMemorySource, ParseError, PartSolver, SolveError,
};

/// Example solver that processes lines of integers
///
/// - Part 1: Sum all numbers
/// - Part 2: Product of all numbers
pub struct ExampleSolver;

impl AocParser for ExampleSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim().parse::<i64>().map_err(|_| {
                    ParseError::InvalidFormat(format!("Expected integer, got: {}", line))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for ExampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for ExampleSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Dispatch Table Example ===\n");

    let source = InMemorySource::new()
        .with_day(1, "Add and multiply", "1\n2\n3\n4\n5")
        .with_day(2, "Broken input", "1\ntwo\n3");

    let table = DispatchTableBuilder::new()
        .register_part::<ExampleSolver, 1>(1)?
        .register_part::<ExampleSolver, 2>(1)?
        .register_part::<ExampleSolver, 1>(2)?
        .build(source);

    for (day, part) in [(1, 1), (1, 2), (3, 1), (2, 1), (26, 1)] {
        let outcome = table.solve(day, part);
        println!(
            "day {:>2} part {} [{:?}, {}µs]",
            day,
            part,
            outcome.status,
            outcome.duration().num_microseconds().unwrap_or(0)
        );
        println!("  description: {}", outcome.result.description());
        println!("  answer:      {}", outcome.result.answer());
    }

    Ok(())
}
