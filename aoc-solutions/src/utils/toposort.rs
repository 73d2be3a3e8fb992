//! Topological ordering by repeated removal of zero in-degree nodes

use std::collections::HashMap;
use std::hash::Hash;

/// Order `nodes` so that for every edge `(a, b)`, `a` comes before `b`.
///
/// Each pass picks the earliest node in `nodes` order whose in-degree has
/// dropped to zero, so ties are broken by the original order. Edges that
/// mention a node not in `nodes` are ignored.
///
/// Returns None if the edges form a cycle.
pub fn topological_order<T, I>(nodes: &[T], edges: I) -> Option<Vec<T>>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = (T, T)>,
{
    let mut in_degree: HashMap<T, usize> = nodes.iter().map(|&n| (n, 0)).collect();
    let mut successors: HashMap<T, Vec<T>> = HashMap::new();

    for (from, to) in edges {
        if !in_degree.contains_key(&from) {
            continue;
        }
        let Some(degree) = in_degree.get_mut(&to) else {
            continue;
        };
        *degree += 1;
        successors.entry(from).or_default().push(to);
    }

    let mut remaining = nodes.to_vec();
    let mut order = Vec::with_capacity(nodes.len());

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .position(|n| in_degree.get(n) == Some(&0))?;
        let node = remaining.remove(next);

        for succ in successors.get(&node).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(succ) {
                *degree = degree.saturating_sub(1);
            }
        }
        order.push(node);
    }

    Some(order)
}
