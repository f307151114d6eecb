//! Order crossover (OX).
//!
//! Copies the segment `[cut1, cut2)` verbatim from each parent into its
//! child, then fills the remaining positions (starting just past `cut2` and
//! wrapping) with the *other* parent's values scanned in the same cyclic
//! order, skipping values already present in the copied segment. The fill
//! preserves the donor parent's relative order of non-segment genes. Exactly
//! `n - (cut2 - cut1)` distinct unused values remain, each placed once, so
//! validity holds by counting.

use super::cut_points;
use crate::rng::RandomNumberGenerator;

pub(crate) fn order_crossover(
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

/// Copies `keep[cut1..cut2]` into the child, then fills cyclically from
/// `donor` starting after `cut2`.
fn build_child(keep: &[usize], donor: &[usize], cut1: usize, cut2: usize) -> Vec<usize> {
    let n = keep.len();
    let mut child = vec![0usize; n];
    let mut used = vec![false; n];

    for i in cut1..cut2 {
        child[i] = keep[i];
        used[keep[i]] = true;
    }

    // Both the fill positions and the donor scan begin just after the
    // segment and wrap around; the counts match, so the cursor never
    // re-enters the segment.
    let mut slot = cut2 % n;
    for offset in 0..n {
        let value = donor[(cut2 + offset) % n];
        if !used[value] {
            child[slot] = value;
            used[value] = true;
            slot = (slot + 1) % n;
        }
    }

    child
}
