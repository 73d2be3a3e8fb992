use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use itertools::Itertools;

pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(str::parse::<i64>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|report| is_safe(report)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count();
        Ok(safe.to_string())
    }
}

/// A report is safe when it moves in the direction set by its first two levels
/// and every step changes by 1 to 3. Reports shorter than two levels are safe.
pub fn is_safe(levels: &[i64]) -> bool {
    let [first, second, ..] = levels else {
        return true;
    };
    let increasing = second > first;

    levels.iter().tuple_windows().all(|(a, b)| {
        let diff = b - a;
        (1..=3).contains(&diff.abs()) && (diff > 0) == increasing
    })
}

/// Safe as is, or safe after removing any single level
pub fn is_safe_with_dampener(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let trial: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &level)| level)
                .collect();
            is_safe(&trial)
        })
}
