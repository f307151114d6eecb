//! # Crossover Operators
//!
//! Permutation-preserving recombination: each operator combines two parent
//! tours into two child tours that are, by construction, permutations of the
//! same value set as their parents. The operators differ in *which* structure
//! they inherit:
//!
//! - [`Crossover::Cycle`] inherits absolute positions along a parent-pair
//!   cycle,
//! - [`Crossover::Order`] inherits a verbatim segment plus the other
//!   parent's relative order,
//! - [`Crossover::PartiallyMapped`] inherits a cross-copied segment with
//!   mapping-chain conflict resolution,
//! - [`Crossover::EdgeRecombination`] inherits the parents' adjacency
//!   (edge) sets.
//!
//! The operator is a closed enum resolved once at configuration time; call
//! sites dispatch through a single `match`, never through strings. Operators
//! read their parents and return freshly constructed children with unset
//! fitness caches; parent buffers are never written through.
//!
//! ## Example
//!
//! ```rust
//! use evotour::crossover::Crossover;
//! use evotour::rng::RandomNumberGenerator;
//! use evotour::tour::Tour;
//!
//! let mut rng = RandomNumberGenerator::from_seed(9);
//! let p1 = Tour::random(8, &mut rng);
//! let p2 = Tour::random(8, &mut rng);
//!
//! let op: Crossover = "pmx".parse().unwrap();
//! let (c1, c2) = op.apply(&p1, &p2, &mut rng);
//! assert_eq!(c1.len(), 8);
//! assert_eq!(c2.len(), 8);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::EvolveError;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

pub(crate) mod cycle;
pub(crate) mod edge;
pub(crate) mod order;
pub(crate) mod pmx;

/// The recombination algorithm applied to each selected parent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// Cycle crossover (CX): positional fidelity along one value cycle.
    Cycle,
    /// Order crossover (OX): segment copy plus order-preserving fill.
    Order,
    /// Partially mapped crossover (PMX): segment swap plus mapping chains.
    PartiallyMapped,
    /// Edge recombination (ERX): greedy reconstruction from shared edges.
    EdgeRecombination,
}

impl Crossover {
    /// Recombines two parents into two children.
    ///
    /// Both children are permutations of the parents' value set. Parents are
    /// read-only; the children are new individuals with unset fitness caches.
    ///
    /// Tours of fewer than two locations have nothing to recombine and are
    /// cloned as-is.
    ///
    /// # Panics
    ///
    /// Panics if the parents have different lengths. The engine only pairs
    /// individuals drawn from one population, so unequal lengths are an
    /// operator-contract defect, not a runtime condition.
    pub fn apply(
        &self,
        first: &Tour,
        second: &Tour,
        rng: &mut RandomNumberGenerator,
    ) -> (Tour, Tour) {
        assert_eq!(
            first.len(),
            second.len(),
            "crossover parents must cover the same location count"
        );

        if first.len() < 2 {
            return (
                Tour::from_order(first.order().to_vec()),
                Tour::from_order(second.order().to_vec()),
            );
        }

        let (c1, c2) = match self {
            Crossover::Cycle => cycle::cycle_crossover(first.order(), second.order(), rng),
            Crossover::Order => order::order_crossover(first.order(), second.order(), rng),
            Crossover::PartiallyMapped => pmx::pmx_crossover(first.order(), second.order(), rng),
            Crossover::EdgeRecombination => {
                edge::edge_recombination(first.order(), second.order(), rng)
            }
        };

        (Tour::from_order(c1), Tour::from_order(c2))
    }
}

impl FromStr for Crossover {
    type Err = EvolveError;

    /// Parses an operator selector. Accepted selectors: `cx`, `ox`, `pmx`,
    /// `erx`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cx" => Ok(Crossover::Cycle),
            "ox" => Ok(Crossover::Order),
            "pmx" => Ok(Crossover::PartiallyMapped),
            "erx" => Ok(Crossover::EdgeRecombination),
            other => Err(EvolveError::Configuration(format!(
                "unknown crossover operator '{}', expected one of cx, ox, pmx, erx",
                other
            ))),
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crossover::Cycle => "cycle",
            Crossover::Order => "order",
            Crossover::PartiallyMapped => "partially-mapped",
            Crossover::EdgeRecombination => "edge-recombination",
        };
        f.write_str(name)
    }
}

/// Draws the cut points shared by the segment-based operators: `cut1` from
/// `[0, n - 2]` and `cut2` from `(cut1, n)`, so the segment `[cut1, cut2)` is
/// never empty.
pub(crate) fn cut_points(n: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
    debug_assert!(n >= 2);
    let cut1 = rng.index(n - 1);
    let cut2 = rng.range(cut1 + 1, n);
    (cut1, cut2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_permutation(order: &[usize], n: usize) {
        assert_eq!(order.len(), n, "wrong length: {:?}", order);
        let mut seen = vec![false; n];
        for &v in order {
            assert!(v < n, "value {} out of range in {:?}", v, order);
            assert!(!seen[v], "duplicate value {} in {:?}", v, order);
            seen[v] = true;
        }
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("cx".parse::<Crossover>().unwrap(), Crossover::Cycle);
        assert_eq!("ox".parse::<Crossover>().unwrap(), Crossover::Order);
        assert_eq!("pmx".parse::<Crossover>().unwrap(), Crossover::PartiallyMapped);
        assert_eq!(
            "erx".parse::<Crossover>().unwrap(),
            Crossover::EdgeRecombination
        );
    }

    #[test]
    fn test_selector_rejects_unknown() {
        let result = "uniform".parse::<Crossover>();
        match result {
            Err(EvolveError::Configuration(msg)) => assert!(msg.contains("uniform")),
            other => panic!("expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_operators_preserve_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(4242);
        let operators = [
            Crossover::Cycle,
            Crossover::Order,
            Crossover::PartiallyMapped,
            Crossover::EdgeRecombination,
        ];

        for op in operators {
            for n in [2, 3, 7, 25] {
                for _ in 0..50 {
                    let p1 = Tour::random(n, &mut rng);
                    let p2 = Tour::random(n, &mut rng);
                    let (c1, c2) = op.apply(&p1, &p2, &mut rng);
                    assert_permutation(c1.order(), n);
                    assert_permutation(c2.order(), n);
                }
            }
        }
    }

    #[test]
    fn test_single_location_parents_pass_through() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let p1 = Tour::random(1, &mut rng);
        let p2 = Tour::random(1, &mut rng);
        for op in [
            Crossover::Cycle,
            Crossover::Order,
            Crossover::PartiallyMapped,
            Crossover::EdgeRecombination,
        ] {
            let (c1, c2) = op.apply(&p1, &p2, &mut rng);
            assert_eq!(c1.order(), &[0]);
            assert_eq!(c2.order(), &[0]);
        }
    }

    #[test]
    fn test_children_start_unevaluated() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut p1 = Tour::random(6, &mut rng);
        let mut p2 = Tour::random(6, &mut rng);
        p1.set_fitness(3.0);
        p2.set_fitness(4.0);

        let (c1, c2) = Crossover::Order.apply(&p1, &p2, &mut rng);
        assert!(c1.needs_evaluation());
        assert!(c2.needs_evaluation());
        // Parents keep their caches: crossover never writes through them.
        assert_eq!(p1.fitness(), Some(3.0));
        assert_eq!(p2.fitness(), Some(4.0));
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(77);
        for _ in 0..1000 {
            let (cut1, cut2) = cut_points(10, &mut rng);
            assert!(cut1 < cut2);
            assert!(cut2 < 10);
        }
    }
}
