use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use regex::Regex;
use std::sync::LazyLock;

/// `mul(A,B)` with optional whitespace inside, or one of the two control tokens
static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\(\s*([0-9]+)\s*,\s*([0-9]+)\s*\)|do\(\)|don't\(\)").unwrap()
});

pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|caps| -> Result<Instruction, ParseError> {
                match (caps.get(1), caps.get(2)) {
                    (Some(a), Some(b)) => Ok(Instruction::Mul(
                        parse_operand(a.as_str())?,
                        parse_operand(b.as_str())?,
                    )),
                    _ if &caps[0] == "do()" => Ok(Instruction::Do),
                    _ => Ok(Instruction::Dont),
                }
            })
            .collect()
    }
}

fn parse_operand(digits: &str) -> Result<u64, ParseError> {
    digits
        .parse()
        .map_err(|e| ParseError::InvalidFormat(format!("operand {:?}: {}", digits, e)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let products = shared.iter().filter_map(|instruction| match *instruction {
            Instruction::Mul(a, b) => Some((a, b)),
            _ => None,
        });
        sum_of_products(products)
            .map(|sum| sum.to_string())
            .ok_or_else(overflow)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        enabled_sum(shared)
            .map(|sum| sum.to_string())
            .ok_or_else(overflow)
    }
}

fn overflow() -> SolveError {
    SolveError::Overflow("sum of products exceeds u64".to_string())
}

/// Sum of products reached while enabled; `do()` enables, `don't()` disables
///
/// None when the sum does not fit in a `u64`.
pub fn enabled_sum(instructions: &[Instruction]) -> Option<u64> {
    let enabled_products = instructions
        .iter()
        .scan(true, |enabled, instruction| {
            Some(match *instruction {
                Instruction::Do => {
                    *enabled = true;
                    None
                }
                Instruction::Dont => {
                    *enabled = false;
                    None
                }
                Instruction::Mul(a, b) => (*enabled).then_some((a, b)),
            })
        })
        .flatten();
    sum_of_products(enabled_products)
}

fn sum_of_products(mut pairs: impl Iterator<Item = (u64, u64)>) -> Option<u64> {
    pairs.try_fold(0u64, |sum, (a, b)| sum.checked_add(a.checked_mul(b)?))
}
