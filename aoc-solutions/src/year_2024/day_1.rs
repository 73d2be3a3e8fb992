use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use itertools::Itertools;

pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_pair(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|pairs| {
                let (left, right) = pairs.into_iter().unzip();
                SharedData { left, right }
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_pair(line: &str) -> Result<(i64, i64), anyhow::Error> {
    let mut fields = line.split_whitespace();
    let (Some(left), Some(right), None) = (fields.next(), fields.next(), fields.next()) else {
        bail!("expected two numbers, got {:?}", line);
    };
    Ok((left.parse()?, right.parse()?))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_distance(&shared.left, &shared.right)
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::Overflow("total distance exceeds u64".to_string()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        similarity_score(&shared.left, &shared.right)
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::Overflow("similarity score exceeds i64".to_string()))
    }
}

/// Sum of distances between the columns once each is sorted, None on overflow
pub fn total_distance(left: &[i64], right: &[i64]) -> Option<u64> {
    left.iter()
        .sorted()
        .zip(right.iter().sorted())
        .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r)))
}

/// Each distinct left value, counted once, times its frequency in the right column
///
/// None when the score does not fit in an `i64`.
pub fn similarity_score(left: &[i64], right: &[i64]) -> Option<i64> {
    let right_counts = right.iter().counts();
    left.iter()
        .unique()
        .filter_map(|value| right_counts.get(value).map(|&count| (*value, count)))
        .try_fold(0i64, |sum, (value, count)| {
            sum.checked_add(value.checked_mul(i64::try_from(count).ok()?)?)
        })
}
