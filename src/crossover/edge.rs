//! Edge recombination crossover (ERX).
//!
//! Inherits adjacency rather than position or order: an edge table maps each
//! location to the union of its neighbours across both parents' closed
//! tours. A child is grown greedily from a starting location, always moving
//! to the unvisited neighbour whose own remaining-neighbour list is shortest
//! (ties broken uniformly at random); a location with no unvisited
//! neighbours falls back to a uniformly random unvisited location. Every
//! location is appended exactly once, so the child is a permutation by
//! construction.
//!
//! One child is grown from each parent's first location, yielding the pair
//! the operator interface requires.

use crate::rng::RandomNumberGenerator;

pub(crate) fn edge_recombination(
    p1: &[usize],
    p2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> (Vec<usize>, Vec<usize>) {
    (
        build_child(p1, p2, p1[0], rng),
        build_child(p1, p2, p2[0], rng),
    )
}

/// Union adjacency table of both parents' cyclic neighbour sets.
fn edge_table(p1: &[usize], p2: &[usize]) -> Vec<Vec<usize>> {
    let n = p1.len();
    let mut table: Vec<Vec<usize>> = vec![Vec::with_capacity(4); n];
    for parent in [p1, p2] {
        for (i, &v) in parent.iter().enumerate() {
            let before = parent[(i + n - 1) % n];
            let after = parent[(i + 1) % n];
            for neighbour in [before, after] {
                if !table[v].contains(&neighbour) {
                    table[v].push(neighbour);
                }
            }
        }
    }
    table
}

fn build_child(
    p1: &[usize],
    p2: &[usize],
    start: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    let n = p1.len();
    let mut table = edge_table(p1, p2);
    let mut visited = vec![false; n];
    let mut child = Vec::with_capacity(n);
    let mut current = start;

    loop {
        child.push(current);
        visited[current] = true;
        if child.len() == n {
            break;
        }

        // Consume the current location: it leaves every neighbour list.
        let neighbours = std::mem::take(&mut table[current]);
        for &u in &neighbours {
            table[u].retain(|&x| x != current);
        }

        // Prefer the unvisited neighbour with the fewest remaining
        // neighbours; this keeps rare edges alive longest.
        let mut candidates: Vec<usize> = Vec::new();
        let mut fewest = usize::MAX;
        for &u in &neighbours {
            if visited[u] {
                continue;
            }
            let remaining = table[u].len();
            if remaining < fewest {
                fewest = remaining;
                candidates.clear();
                candidates.push(u);
            } else if remaining == fewest {
                candidates.push(u);
            }
        }

        current = if candidates.is_empty() {
            // Dead end: both parents' edges are exhausted here.
            let unvisited: Vec<usize> = (0..n).filter(|&v| !visited[v]).collect();
            unvisited[rng.index(unvisited.len())]
        } else {
            candidates[rng.index(candidates.len())]
        };
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_permutation(order: &[usize], n: usize) {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>(), "not a permutation: {:?}", order);
    }

    #[test]
    fn test_children_are_permutations() {
        let mut rng = RandomNumberGenerator::from_seed(61);
        for n in [2, 3, 8, 24] {
            for _ in 0..100 {
                let p1 = rng.random_permutation(n);
                let p2 = rng.random_permutation(n);
                let (c1, c2) = edge_recombination(&p1, &p2, &mut rng);
                assert_permutation(&c1, n);
                assert_permutation(&c2, n);
            }
        }
    }

    #[test]
    fn test_children_start_at_parent_heads() {
        let mut rng = RandomNumberGenerator::from_seed(19);
        let p1 = rng.random_permutation(10);
        let p2 = rng.random_permutation(10);
        let (c1, c2) = edge_recombination(&p1, &p2, &mut rng);
        assert_eq!(c1[0], p1[0]);
        assert_eq!(c2[0], p2[0]);
    }

    #[test]
    fn test_edge_table_unions_neighbours() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![0, 2, 1, 3];
        let table = edge_table(&p1, &p2);
        // Location 1: neighbours 0,2 in p1; 2,3 in p2.
        let mut neighbours = table[1].clone();
        neighbours.sort_unstable();
        assert_eq!(neighbours, vec![0, 2, 3]);
    }

    #[test]
    fn test_identical_parents_walk_shared_edges() {
        // With identical parents every edge is shared, so the child follows
        // the parent tour (possibly reversed at each step; either way the
        // successor is always a parent neighbour).
        let p: Vec<usize> = (0..12).collect();
        let mut rng = RandomNumberGenerator::from_seed(29);
        let (c1, _) = edge_recombination(&p, &p, &mut rng);
        assert_permutation(&c1, 12);
        for pair in c1.windows(2) {
            let gap = pair[0].abs_diff(pair[1]);
            assert!(
                gap == 1 || gap == 11,
                "child used edge {:?} absent from the parents",
                pair
            );
        }
    }

    #[test]
    fn test_two_locations() {
        let mut rng = RandomNumberGenerator::from_seed(37);
        let (c1, c2) = edge_recombination(&[0, 1], &[1, 0], &mut rng);
        assert_permutation(&c1, 2);
        assert_permutation(&c2, 2);
    }
}
