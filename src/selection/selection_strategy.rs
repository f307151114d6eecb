use std::fmt::Debug;

use crate::error::{EvolveError, Result};
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

/// Trait for parent selection strategies.
///
/// A selection strategy chooses which individuals of the current population
/// seed the next generation, based on their cached fitness (lower tour
/// length is better). Strategies return owned clones, so the offspring that
/// operators later rework never alias the outgoing population.
///
/// # Examples
///
/// ```
/// use evotour::selection::{SelectionStrategy, TournamentSelection};
/// use evotour::rng::RandomNumberGenerator;
/// use evotour::tour::Tour;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let mut population: Vec<Tour> = (0..4).map(|_| Tour::random(5, &mut rng)).collect();
/// for (i, tour) in population.iter_mut().enumerate() {
///     tour.set_fitness(10.0 + i as f64);
/// }
///
/// let selection = TournamentSelection::default();
/// let parents = selection.select(&population, 4, &mut rng).unwrap();
/// assert_eq!(parents.len(), 4);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// Selections may repeat individuals; every returned tour is an
    /// independent clone.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or any individual lacks a
    /// valid fitness.
    fn select(
        &self,
        population: &[Tour],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Tour>>;
}

/// Collects the fitness of every individual, rejecting unevaluated caches.
///
/// Selection runs strictly after the engine's re-evaluation step, so a miss
/// here means the generational loop is broken, not that input was bad.
pub(crate) fn collected_fitness(population: &[Tour]) -> Result<Vec<f64>> {
    population
        .iter()
        .enumerate()
        .map(|(i, tour)| {
            tour.fitness().ok_or_else(|| {
                EvolveError::UnevaluatedFitness(format!(
                    "individual {} reached selection without a valid fitness",
                    i
                ))
            })
        })
        .collect()
}
