//! # Tour
//!
//! The [`Tour`] is the individual of the evolutionary algorithm: an ordered
//! sequence of all location indices, each visited exactly once. The value set
//! of a tour never changes after construction; crossover and mutation only
//! reorder it, so every individual is a permutation of `[0, N)` for its
//! whole lifetime.
//!
//! Each tour carries a [`FitnessCache`] recording whether its tour length has
//! been computed since the last structural change. Operators that reorder a
//! tour mark the cache stale; the engine recomputes only stale or unset
//! caches each generation.

use crate::rng::RandomNumberGenerator;

/// Cache state of an individual's fitness.
///
/// Replaces the "delete the cached value to mark it dirty" convention with an
/// explicit tri-state: a tour is either never-scored, scored-and-current, or
/// structurally changed since its last score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitnessCache {
    /// No fitness has been computed yet.
    Unset,
    /// Fitness is current for the tour's present order.
    Valid(f64),
    /// The order changed after the last computation; the old value is dead.
    Stale,
}

/// An individual: a permutation of `[0, N)` plus its fitness cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    cache: FitnessCache,
}

impl Tour {
    /// Creates a tour with a uniformly random visiting order over `n`
    /// locations. The fitness cache starts unset.
    pub fn random(n: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            order: rng.random_permutation(n),
            cache: FitnessCache::Unset,
        }
    }

    /// Wraps an order produced by a crossover operator.
    ///
    /// Only operator code constructs tours this way; the order must already
    /// be a permutation of `[0, N)`.
    pub(crate) fn from_order(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order), "operator produced {:?}", order);
        Self {
            order,
            cache: FitnessCache::Unset,
        }
    }

    /// Returns the number of locations in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no locations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the order for mutation operators.
    ///
    /// Callers must only reorder the slice, never change its value set, and
    /// must follow up with [`mark_stale`](Self::mark_stale).
    pub(crate) fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Returns the cached fitness, or `None` when unset or stale.
    pub fn fitness(&self) -> Option<f64> {
        match self.cache {
            FitnessCache::Valid(score) => Some(score),
            _ => None,
        }
    }

    /// Returns the cache state.
    pub fn cache(&self) -> FitnessCache {
        self.cache
    }

    /// Returns `true` if the fitness must be (re)computed.
    pub fn needs_evaluation(&self) -> bool {
        !matches!(self.cache, FitnessCache::Valid(_))
    }

    /// Marks the cache stale after a structural change.
    pub fn mark_stale(&mut self) {
        self.cache = FitnessCache::Stale;
    }

    /// Records a freshly computed fitness, making the cache valid.
    pub fn set_fitness(&mut self, score: f64) {
        self.cache = FitnessCache::Valid(score);
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&v| {
        if v >= seen.len() || seen[v] {
            return false;
        }
        seen[v] = true;
        true
    })
}
