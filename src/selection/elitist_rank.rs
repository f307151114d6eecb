use crate::error::{EvolveError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collected_fitness, SelectionStrategy};
use crate::tour::Tour;

/// A selection strategy combining unconditional elitism with rank-weighted
/// roulette over the rest.
///
/// The population is sorted ascending by tour length. The best
/// `floor(n * elite_rate)` individuals survive unconditionally; every
/// remaining slot is filled by spinning a roulette wheel over the non-elite
/// remainder, where an individual's weight is its *reverse rank*: the worst
/// has weight 1, the best of the remainder has weight equal to the remainder
/// size. Draws do not remove candidates, so a strong non-elite tour may fill
/// several slots.
///
/// Rank weighting looks at relative order only, so a single outlier fitness
/// cannot dominate the wheel the way raw-fitness roulette lets it.
///
/// The two degenerate rates are meaningful: `elite_rate = 1.0` is pure
/// elitism (the exact top-n survive), `elite_rate = 0.0` is pure
/// rank-weighted roulette.
///
/// # Examples
///
/// ```
/// use evotour::selection::{ElitistRankRouletteSelection, SelectionStrategy};
/// use evotour::rng::RandomNumberGenerator;
/// use evotour::tour::Tour;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let mut population: Vec<Tour> = (0..8).map(|_| Tour::random(6, &mut rng)).collect();
/// for (i, tour) in population.iter_mut().enumerate() {
///     tour.set_fitness(i as f64);
/// }
///
/// let selection = ElitistRankRouletteSelection::new(0.25).unwrap();
/// let survivors = selection.select(&population, 8, &mut rng).unwrap();
/// assert_eq!(survivors.len(), 8);
/// // The top quarter survives unconditionally.
/// assert_eq!(survivors[0].fitness(), Some(0.0));
/// assert_eq!(survivors[1].fitness(), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct ElitistRankRouletteSelection {
    elite_rate: f64,
}

impl ElitistRankRouletteSelection {
    /// Creates a new strategy with the given elite rate.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `elite_rate` is outside `[0, 1]`
    /// or not finite. The rate is never clamped.
    pub fn new(elite_rate: f64) -> Result<Self> {
        if !elite_rate.is_finite() || !(0.0..=1.0).contains(&elite_rate) {
            return Err(EvolveError::Configuration(format!(
                "elite rate must be in [0, 1], got {}",
                elite_rate
            )));
        }
        Ok(Self { elite_rate })
    }

    /// Spins the reverse-rank wheel over `remainder_size` candidates and
    /// returns the winning offset into the remainder (0 = best).
    fn spin(&self, remainder_size: usize, rng: &mut RandomNumberGenerator) -> usize {
        // Weights m, m-1, ..., 1 sum to m(m+1)/2.
        let total = remainder_size * (remainder_size + 1) / 2;
        let mut ticket = rng.index(total);
        for offset in 0..remainder_size {
            let weight = remainder_size - offset;
            if ticket < weight {
                return offset;
            }
            ticket -= weight;
        }
        unreachable!("ticket exceeded the wheel's total weight")
    }
}

impl SelectionStrategy for ElitistRankRouletteSelection {
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

        // Ascending tour length; ties keep their population order.
        let mut ranked: Vec<usize> = (0..population.len()).collect();
        ranked.sort_by(|&a, &b| {
            fitness[a]
                .partial_cmp(&fitness[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let elite_count = ((num_to_select as f64) * self.elite_rate).floor() as usize;
        let elite_count = elite_count.min(population.len()).min(num_to_select);

        let mut selected: Vec<Tour> = ranked[..elite_count]
            .iter()
            .map(|&i| population[i].clone())
            .collect();

        let remainder = &ranked[elite_count..];
        if selected.len() < num_to_select && remainder.is_empty() {
            return Err(EvolveError::Configuration(format!(
                "elite rate {} leaves no candidates for {} roulette slots",
                self.elite_rate,
                num_to_select - selected.len()
            )));
        }

        while selected.len() < num_to_select {
            let offset = self.spin(remainder.len(), rng);
            selected.push(population[remainder[offset]].clone());
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_population(fitness: &[f64], rng: &mut RandomNumberGenerator) -> Vec<Tour> {
        fitness
            .iter()
            .map(|&f| {
                let mut tour = Tour::random(6, rng);
                tour.set_fitness(f);
                tour
            })
            .collect()
    }

    fn fitness_of(selected: &[Tour]) -> Vec<f64> {
        selected.iter().map(|t| t.fitness().unwrap()).collect()
    }

    #[test]
    fn test_full_elitism_keeps_exact_top_set() {
        let mut rng = RandomNumberGenerator::from_seed(211);
        let population = scored_population(&[5.0, 1.0, 4.0, 2.0, 3.0], &mut rng);

        let selection = ElitistRankRouletteSelection::new(1.0).unwrap();
        let selected = selection.select(&population, 5, &mut rng).unwrap();

        let mut scores = fitness_of(&selected);
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zero_rate_is_pure_roulette() {
        let mut rng = RandomNumberGenerator::from_seed(223);
        let population = scored_population(&[5.0, 1.0, 4.0, 2.0, 3.0], &mut rng);

        let selection = ElitistRankRouletteSelection::new(0.0).unwrap();
        let selected = selection.select(&population, 5, &mut rng).unwrap();
        assert_eq!(selected.len(), 5);
        // No guaranteed survivor: everything is drawn from the wheel, and
        // every draw produces some member of the population.
        for score in fitness_of(&selected) {
            assert!((1.0..=5.0).contains(&score));
        }
    }

    #[test]
    fn test_elites_precede_roulette_picks() {
        let mut rng = RandomNumberGenerator::from_seed(227);
        let population = scored_population(&[9.0, 3.0, 7.0, 1.0, 5.0, 8.0], &mut rng);

        // floor(6 * 0.34) = 2 elites.
        let selection = ElitistRankRouletteSelection::new(0.34).unwrap();
        let selected = selection.select(&population, 6, &mut rng).unwrap();
        assert_eq!(selected.len(), 6);
        assert_eq!(selected[0].fitness(), Some(1.0));
        assert_eq!(selected[1].fitness(), Some(3.0));
    }

    #[test]
    fn test_wheel_favors_better_ranks() {
        let mut rng = RandomNumberGenerator::from_seed(229);
        let population = scored_population(&[1.0, 2.0, 3.0, 4.0], &mut rng);

        let selection = ElitistRankRouletteSelection::new(0.0).unwrap();
        let selected = selection.select(&population, 4000, &mut rng).unwrap();

        let count = |score: f64| {
            selected
                .iter()
                .filter(|t| t.fitness() == Some(score))
                .count()
        };
        // Expected shares with weights 4:3:2:1 over 4000 draws.
        assert!(count(1.0) > count(2.0));
        assert!(count(2.0) > count(3.0));
        assert!(count(3.0) > count(4.0));
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        assert!(ElitistRankRouletteSelection::new(-0.1).is_err());
        assert!(ElitistRankRouletteSelection::new(1.1).is_err());
        assert!(ElitistRankRouletteSelection::new(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(233);
        let selection = ElitistRankRouletteSelection::new(0.5).unwrap();
        assert!(matches!(
            selection.select(&[], 2, &mut rng),
            Err(EvolveError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_spin_covers_all_offsets() {
        let mut rng = RandomNumberGenerator::from_seed(239);
        let selection = ElitistRankRouletteSelection::new(0.0).unwrap();
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[selection.spin(5, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s), "some ranks never won: {:?}", seen);
    }
}
