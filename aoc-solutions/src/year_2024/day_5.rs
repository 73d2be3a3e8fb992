use crate::utils::toposort::topological_order;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use std::collections::{HashMap, HashSet};

pub struct Solver;

/// `before` must be printed ahead of `after` when both appear in an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub before: u32,
    pub after: u32,
}

#[derive(Debug)]
pub struct SharedData {
    rules: Vec<Rule>,
    updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input
            .lines()
            .map(str::trim)
            .enumerate()
            .skip_while(|(_, line)| line.is_empty());

        let rules = lines
            .by_ref()
            .take_while(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| parse_rule(line).with_context(|| format!("(line {})", line_idx + 1)))
            .collect::<Result<Vec<_>, _>>();

        let updates = lines
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.split(',')
                    .map(|page| page.trim().parse::<u32>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>();

        rules
            .and_then(|rules| updates.map(|updates| SharedData { rules, updates }))
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_rule(line: &str) -> Result<Rule, anyhow::Error> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("expected `x|y`, got {:?}", line))?;
    Ok(Rule {
        before: before.trim().parse()?,
        after: after.trim().parse()?,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let middles = shared
            .updates
            .iter()
            .filter(|update| is_valid(update, &shared.rules))
            .map(|update| middle(update));
        sum_middles(middles).map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut middles = Vec::new();
        for update in shared.updates.iter().filter(|u| !is_valid(u, &shared.rules)) {
            let ordered = reorder(update, &shared.rules).ok_or_else(|| {
                SolveError::Unsolvable(format!("rules for update {:?} form a cycle", update))
            })?;
            middles.push(middle(&ordered));
        }
        sum_middles(middles).map(|sum| sum.to_string())
    }
}

fn sum_middles(middles: impl IntoIterator<Item = u32>) -> Result<u64, SolveError> {
    middles
        .into_iter()
        .try_fold(0u64, |sum, page| sum.checked_add(u64::from(page)))
        .ok_or_else(|| SolveError::Overflow("sum of middle pages exceeds u64".to_string()))
}

/// Rules whose two pages both occur in `update`
pub fn applicable_rules<'r>(update: &[u32], rules: &'r [Rule]) -> impl Iterator<Item = &'r Rule> {
    let pages: HashSet<u32> = update.iter().copied().collect();
    rules
        .iter()
        .filter(move |rule| pages.contains(&rule.before) && pages.contains(&rule.after))
}

/// Whether every applicable rule is satisfied by the update's order
pub fn is_valid(update: &[u32], rules: &[Rule]) -> bool {
    let position: HashMap<u32, usize> = update.iter().enumerate().map(|(i, &p)| (p, i)).collect();
    applicable_rules(update, rules).all(|rule| position[&rule.before] < position[&rule.after])
}

/// The update sorted to satisfy its applicable rules, or None if they form a cycle
pub fn reorder(update: &[u32], rules: &[Rule]) -> Option<Vec<u32>> {
    let edges = applicable_rules(update, rules).map(|rule| (rule.before, rule.after));
    topological_order(update, edges)
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::parse_and_solve;
    use proptest::prelude::*;

    const SAMPLE: &str = "47|53\n97|13\n97|61\n97|47\n75|29\n61|13\n75|53\n29|13\n97|29\n53|29\n\
                          61|53\n97|53\n61|29\n47|13\n75|47\n97|75\n47|61\n75|61\n47|29\n75|13\n53|13\n\
                          \n\
                          75,47,61,53,29\n\
                          97,61,53,29,13\n\
                          75,29,13\n\
                          75,97,47,61,53\n\
                          61,13,29\n\
                          97,13,75,29,47\n";

    #[test]
    fn test_sample_part_1() {
        assert_eq!(parse_and_solve::<Solver, 1>(SAMPLE).unwrap(), "143");
    }

    #[test]
    fn test_sample_part_2() {
        assert_eq!(parse_and_solve::<Solver, 2>(SAMPLE).unwrap(), "123");
    }

    #[test]
    fn test_reorder_sample_updates() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(reorder(&[75, 97, 47, 61, 53], &shared.rules), Some(vec![97, 75, 47, 61, 53]));
        assert_eq!(reorder(&[61, 13, 29], &shared.rules), Some(vec![61, 29, 13]));
        assert_eq!(reorder(&[97, 13, 75, 29, 47], &shared.rules), Some(vec![97, 75, 47, 29, 13]));
    }

    #[test]
    fn test_rules_outside_update_are_ignored() {
        let rules = [Rule { before: 9, after: 1 }, Rule { before: 2, after: 3 }];
        assert!(is_valid(&[1, 2, 3], &rules));
        assert!(!is_valid(&[3, 2], &rules));
    }

    #[test]
    fn test_cycle_degrades_part_2() {
        let input = "1|2\n2|3\n3|1\n\n3,2,1\n";
        assert!(matches!(
            parse_and_solve::<Solver, 2>(input),
            Err(aoc_solver::SolverError::SolveError(SolveError::Unsolvable(_)))
        ));
    }

    #[test]
    fn test_malformed_rule_is_rejected() {
        let err = Solver::parse("1|2\n3-4\n\n1,2").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(Solver::parse("1|2\n\n1,x").is_err());
    }

    #[test]
    fn test_leading_blank_lines_keep_line_numbers() {
        let err = Solver::parse("\n\n1|2\n3-4\n\n1,2").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{}", err);

        let err = Solver::parse("\n1|2\n\n1,2\n1,y").unwrap_err();
        assert!(err.to_string().contains("line 5"), "{}", err);

        let shared = Solver::parse("\n\n47|53\n\n47,53,61\n").unwrap();
        assert_eq!(shared.rules, vec![Rule { before: 47, after: 53 }]);
        assert_eq!(shared.updates, vec![vec![47, 53, 61]]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// A reordered update always satisfies the rules it was reordered by
        #[test]
        fn prop_reordered_update_is_valid(
            (ranking, update, mask) in prop::collection::hash_set(10u32..100, 2..12)
                .prop_flat_map(|pages| {
                    let pages: Vec<u32> = pages.into_iter().collect();
                    let n = pages.len();
                    (
                        Just(pages.clone()).prop_shuffle(),
                        Just(pages).prop_shuffle(),
                        prop::collection::vec(any::<bool>(), n * n),
                    )
                })
        ) {
            // Rules consistent with `ranking`, a random subset of all ordered pairs
            let n = ranking.len();
            let rules: Vec<Rule> = (0..n)
                .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
                .filter(|&(i, j)| mask[i * n + j])
                .map(|(i, j)| Rule { before: ranking[i], after: ranking[j] })
                .collect();

            let ordered = reorder(&update, &rules).unwrap();
            prop_assert!(is_valid(&ordered, &rules));

            let mut sorted_in = update.clone();
            let mut sorted_out = ordered.clone();
            sorted_in.sort_unstable();
            sorted_out.sort_unstable();
            prop_assert_eq!(sorted_in, sorted_out);

            if is_valid(&update, &rules) {
                prop_assert_eq!(ordered, update);
            }
        }
    }
}
