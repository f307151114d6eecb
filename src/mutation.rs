//! # Mutation Operators
//!
//! Pure repositioning perturbations of a single tour: every operator
//! rearranges which positions hold which locations and never alters the
//! value set, so the permutation invariant survives any sequence of
//! mutations. A firing mutation always draws positions that actually change
//! the order, then marks the tour's fitness cache stale.
//!
//! Like the crossover selector, the operator is a closed enum resolved once
//! at configuration time (`ins`, `swp`, `inv`).

use std::fmt;
use std::str::FromStr;

use crate::error::EvolveError;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

/// The perturbation applied to individuals selected for mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Relocate one random gene to a different random position.
    Insertion,
    /// Exchange two distinct random positions.
    Swap,
    /// Reverse a random contiguous segment of length at least two.
    Inversion,
}

impl Mutation {
    /// Mutates the tour in place and marks its fitness cache stale.
    ///
    /// Tours of fewer than two locations have no alternative order; they are
    /// left untouched and their cache stays as it was.
    pub fn apply(&self, tour: &mut Tour, rng: &mut RandomNumberGenerator) {
        let n = tour.len();
        if n < 2 {
            return;
        }

        match self {
            Mutation::Insertion => {
                let from = rng.index(n);
                // Target a final resting position different from the origin,
                // so the order always changes.
                let mut to = rng.index(n - 1);
                if to >= from {
                    to += 1;
                }
                let order = tour.order_mut();
                let gene = order.remove(from);
                order.insert(to, gene);
            }
            Mutation::Swap => {
                let i = rng.index(n);
                let mut j = rng.index(n - 1);
                if j >= i {
                    j += 1;
                }
                tour.order_mut().swap(i, j);
            }
            Mutation::Inversion => {
                let cut1 = rng.index(n - 1);
                let cut2 = rng.range(cut1 + 1, n);
                tour.order_mut()[cut1..=cut2].reverse();
            }
        }

        tour.mark_stale();
    }
}

impl FromStr for Mutation {
    type Err = EvolveError;

    /// Parses an operator selector. Accepted selectors: `ins`, `swp`, `inv`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ins" => Ok(Mutation::Insertion),
            "swp" => Ok(Mutation::Swap),
            "inv" => Ok(Mutation::Inversion),
            other => Err(EvolveError::Configuration(format!(
                "unknown mutation operator '{}', expected one of ins, swp, inv",
                other
            ))),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mutation::Insertion => "insertion",
            Mutation::Swap => "swap",
            Mutation::Inversion => "inversion",
        };
        f.write_str(name)
    }
}
