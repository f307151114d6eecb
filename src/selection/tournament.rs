use crate::error::{EvolveError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collected_fitness, SelectionStrategy};
use crate::tour::Tour;

/// A selection strategy that selects individuals through tournament selection.
///
/// To fill one slot, `tournament_size` participants are sampled uniformly
/// **with replacement** from the population and the one with the lowest tour
/// length wins. Each slot runs an independent tournament, so the same
/// individual can win several slots.
///
/// Tournament selection balances exploration and exploitation through the
/// tournament size: size 1 degenerates to uniform random selection, larger
/// sizes concentrate on the current best tours.
///
/// # Examples
///
/// ```
/// use evotour::selection::{SelectionStrategy, TournamentSelection};
/// use evotour::rng::RandomNumberGenerator;
/// use evotour::tour::Tour;
///
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let mut population: Vec<Tour> = (0..6).map(|_| Tour::random(8, &mut rng)).collect();
/// for (i, tour) in population.iter_mut().enumerate() {
///     tour.set_fitness(20.0 - i as f64);
/// }
///
/// let selection = TournamentSelection::new(3).unwrap();
/// let parents = selection.select(&population, 6, &mut rng).unwrap();
/// assert_eq!(parents.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified
    /// tournament size.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(EvolveError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.index(fitness.len());
        for _ in 1..self.tournament_size {
            let idx = rng.index(fitness.len());
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }
        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Matches the conventional tournament size for tour optimization.
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Tour],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Tour>> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let fitness = collected_fitness(population)?;

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner = self.run_tournament(&fitness, rng);
            selected.push(population[winner].clone());
        }
        Ok(selected)
    }
}
