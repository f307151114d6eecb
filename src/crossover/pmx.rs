//! Partially mapped crossover (PMX).
//!
//! Cross-copies the segment `[cut1, cut2)` between the children (each child
//! receives the *other* parent's segment at the same positions). Outside the
//! segment, the owning parent's value is copied directly when it is still
//! unused; a conflicting value is resolved by following the mapping the
//! swapped segment implies: locate the value inside the child's own segment,
//! read the owning parent's value at that position, and repeat until an
//! unused value appears. Each hop moves through a finite bijection confined
//! to the segment, so the chain terminates within segment-length hops.

use super::cut_points;
use crate::rng::RandomNumberGenerator;

pub(crate) fn pmx_crossover(
    p1: &[usize],
    p2: &[usize],
    rng: &mut RandomNumberGenerator,
) -> (Vec<usize>, Vec<usize>) {
    let (cut1, cut2) = cut_points(p1.len(), rng);
    (
        build_child(p1, p2, cut1, cut2),
        build_child(p2, p1, cut1, cut2),
    )
}

/// Builds the child that keeps `own` outside the segment and receives
/// `other[cut1..cut2]` inside it.
fn build_child(own: &[usize], other: &[usize], cut1: usize, cut2: usize) -> Vec<usize> {
    let n = own.len();
    let mut child = vec![0usize; n];
    let mut used = vec![false; n];
    // Position of each segment value within the child's segment; values
    // outside the segment stay at the sentinel and are never looked up.
    let mut segment_position = vec![usize::MAX; n];

    for i in cut1..cut2 {
        child[i] = other[i];
        used[other[i]] = true;
        segment_position[other[i]] = i;
    }

    for i in (0..cut1).chain(cut2..n) {
        let mut value = own[i];
        let mut hops = 0usize;
        while used[value] {
            // A conflicting value always sits inside the child's segment:
            // everything placed outside so far came from `own`, which cannot
            // collide with another of its own values.
            value = own[segment_position[value]];
            hops += 1;
            debug_assert!(hops <= cut2 - cut1, "mapping chain escaped the segment");
        }
        child[i] = value;
        used[value] = true;
    }

    child
}
