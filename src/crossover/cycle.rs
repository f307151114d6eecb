//! Cycle crossover (CX).
//!
//! Discovers one cycle of positions closed under the value bijection between
//! the parents, starting from a random index: the position of `p2[i]` within
//! `p1` is the next index after `i`. On-cycle positions keep the same-parent
//! value in each child; every uncovered position takes the *other* parent's
//! value. The covered positions hold the same value set in both parents, so
//! swapping the remainder cannot introduce duplicates.

use crate::rng::RandomNumberGenerator;

pub(crate) fn cycle_crossover(
    p1: &[usize],
    p2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> (Vec<usize>, Vec<usize>) {
    let n = p1.len();

    // Position of each value within p1, for O(1) cycle jumps.
    let mut position_in_p1 = vec![0usize; n];
    for (i, &v) in p1.iter().enumerate() {
        position_in_p1[v] = i;
    }

    let start = rng.index(n);
    let mut on_cycle = vec![false; n];
    let mut index = start;
    loop {
        on_cycle[index] = true;
        index = position_in_p1[p2[index]];
        if index == start {
            break;
        }
    }

    let c1 = (0..n)
        .map(|i| if on_cycle[i] { p1[i] } else { p2[i] })
        .collect();
    let c2 = (0..n)
        .map(|i| if on_cycle[i] { p2[i] } else { p1[i] })
        .collect();

    (c1, c2)
}
