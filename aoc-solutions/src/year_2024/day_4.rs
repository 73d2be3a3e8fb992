use crate::utils::grid::{DIRECTIONS, Grid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};

const WORD: &[u8] = b"XMAS";
const CROSS: &[u8] = b"MAS";

pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input);
        if grid.height() == 0 {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_word(shared, WORD).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_crosses(shared, CROSS).to_string())
    }
}

/// Occurrences of `word` starting at any cell in any of the 8 directions
pub fn count_word(grid: &Grid<'_>, word: &[u8]) -> usize {
    grid.cells()
        .map(|cell| {
            DIRECTIONS
                .iter()
                .filter(|&&dir| grid.spells(cell, dir, word))
                .count()
        })
        .sum()
}

/// Cells where both diagonals through the cell spell `pattern`, forwards or backwards
///
/// `pattern` must have odd length so that it has a middle letter.
pub fn count_crosses(grid: &Grid<'_>, pattern: &[u8]) -> usize {
    let reversed: Vec<u8> = pattern.iter().rev().copied().collect();
    let half = (pattern.len() / 2) as isize;

    let either_way = |start: (isize, isize), dir: (isize, isize)| {
        grid.spells(start, dir, pattern) || grid.spells(start, dir, &reversed)
    };

    grid.cells()
        .filter(|&(r, c)| {
            either_way((r - half, c - half), (1, 1)) && either_way((r + half, c - half), (-1, 1))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::parse_and_solve;
    use proptest::prelude::*;

    const SAMPLE: &str = "MMMSXXMASM\n\
                          MSAMXMSMSA\n\
                          AMXSXMAAMM\n\
                          MSAMASMSMX\n\
                          XMASAMXAMM\n\
                          XXAMMXXAMA\n\
                          SMSMSASXSS\n\
                          SAXAMASAAA\n\
                          MAMMMXMMMM\n\
                          MXMXAXMASX";

    #[test]
    fn test_sample_part_1() {
        assert_eq!(parse_and_solve::<Solver, 1>(SAMPLE).unwrap(), "18");
    }

    #[test]
    fn test_sample_part_2() {
        assert_eq!(parse_and_solve::<Solver, 2>(SAMPLE).unwrap(), "9");
    }

    #[test]
    fn test_sparse_crosses() {
        let input = ".M.S......\n\
                     ..A..MSMS.\n\
                     .M.S.MAA..\n\
                     ..A.ASMSM.\n\
                     .M.S.M....\n\
                     ..........\n\
                     S.S.S.S.S.\n\
                     .A.A.A.A..\n\
                     M.M.M.M.M.\n\
                     ..........";
        assert_eq!(parse_and_solve::<Solver, 2>(input).unwrap(), "9");
    }

    #[test]
    fn test_palindromic_match_counts_twice() {
        // Same cell, two directions
        let grid = Grid::parse("ABA");
        assert_eq!(count_word(&grid, b"AB"), 2);
        assert_eq!(count_word(&grid, b"ABA"), 2);
    }

    #[test]
    fn test_crosses_need_both_diagonals() {
        assert_eq!(count_crosses(&Grid::parse("M.S\n.A.\nM.S"), CROSS), 1);
        assert_eq!(count_crosses(&Grid::parse("M.M\n.A.\nS.S"), CROSS), 1);
        assert_eq!(count_crosses(&Grid::parse("M.M\n.A.\nS.M"), CROSS), 0);
        // A plus shape is not a cross
        assert_eq!(count_crosses(&Grid::parse(".M.\nMAS\n.S."), CROSS), 0);
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        assert!(Solver::parse("\n\n").is_err());
    }

    fn mirrored(rows: &[String]) -> String {
        rows.iter()
            .map(|row| row.chars().rev().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Every match has a mirror-image match, so mirroring the grid keeps the totals
        #[test]
        fn prop_mirroring_keeps_counts(
            rows in (1usize..12).prop_flat_map(|width| {
                prop::collection::vec(
                    prop::collection::vec(prop::sample::select(vec!['X', 'M', 'A', 'S']), width)
                        .prop_map(|cells| cells.into_iter().collect::<String>()),
                    1..12,
                )
            })
        ) {
            let original = rows.join("\n");
            let flipped = mirrored(&rows);
            let upside_down = rows.iter().rev().cloned().collect::<Vec<_>>().join("\n");

            let words = |input: &str| count_word(&Grid::parse(input), WORD);
            let crosses = |input: &str| count_crosses(&Grid::parse(input), CROSS);

            prop_assert_eq!(words(&original), words(&flipped));
            prop_assert_eq!(words(&original), words(&upside_down));
            prop_assert_eq!(crosses(&original), crosses(&flipped));
            prop_assert_eq!(crosses(&original), crosses(&upside_down));
        }
    }
}
