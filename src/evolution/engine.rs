//! # EvolutionEngine
//!
//! Drives the generational loop: select parents, recombine adjacent pairs,
//! mutate individuals, re-evaluate whatever changed, archive the best and
//! replace the population wholesale. The engine owns every piece of mutable
//! state (population, random stream, archive, statistics history) and the
//! read-only [`DistanceModel`]; nothing lives in module globals.
//!
//! A run executes a fixed number of generations. There is no convergence
//! detection and no early exit: the loop either completes or fails outright
//! before it starts (invalid configuration never reaches the engine).
//!
//! ## Example
//!
//! ```rust
//! use evotour::distance::DistanceModel;
//! use evotour::evolution::{EvolutionEngine, EvolutionOptions};
//! use evotour::selection::TournamentSelection;
//!
//! let distances = DistanceModel::from_coordinates(&[
//!     (0.0, 0.0),
//!     (3.0, 0.0),
//!     (3.0, 4.0),
//!     (0.0, 4.0),
//! ]).unwrap();
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(60)
//!     .population_size(24)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut engine =
//!     EvolutionEngine::new(distances, options, TournamentSelection::default()).unwrap();
//! let summary = engine.run(|_stats| {}).unwrap();
//! // The perimeter walk of a 3x4 rectangle is the optimum.
//! assert!((summary.length - 14.0).abs() < 1e-9);
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use crate::distance::DistanceModel;
use crate::error::{EvolveError, Result};
use crate::evolution::hall_of_fame::HallOfFame;
use crate::evolution::options::EvolutionOptions;
use crate::evolution::stats::GenerationStats;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;
use crate::tour::Tour;

/// The outcome of a completed run: the best tour ever archived and its
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionSummary {
    /// The best tour across all generations, including the initial
    /// population.
    pub tour: Tour,
    /// Its closed-tour length.
    pub length: f64,
}

/// Orchestrates the generational evolution of a tour population.
#[derive(Debug)]
pub struct EvolutionEngine<S: SelectionStrategy> {
    distances: DistanceModel,
    options: EvolutionOptions,
    selection: S,
    rng: RandomNumberGenerator,
    population: Vec<Tour>,
    hall_of_fame: HallOfFame,
    history: Vec<GenerationStats>,
}

impl<S: SelectionStrategy> EvolutionEngine<S> {
    /// Creates an engine with a hall of fame of capacity 1.
    ///
    /// The initial population is generated, fully evaluated and archived
    /// here, so even a zero-generation run reports a best tour.
    pub fn new(distances: DistanceModel, options: EvolutionOptions, selection: S) -> Result<Self> {
        Self::new_with_archive(distances, options, selection, 1)
    }

    /// Creates an engine with a hall of fame of the given capacity.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `archive_capacity` is zero.
    pub fn new_with_archive(
        distances: DistanceModel,
        options: EvolutionOptions,
        selection: S,
        archive_capacity: usize,
    ) -> Result<Self> {
        let mut rng = match options.seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        info!(
            locations = distances.len(),
            population_size = options.population_size(),
            generations = options.num_generations(),
            crossover = %options.crossover(),
            mutation = %options.mutation(),
            parallel = options.parallel(),
            "initializing evolution engine"
        );

        let mut population: Vec<Tour> = (0..options.population_size())
            .map(|_| Tour::random(distances.len(), &mut rng))
            .collect();

        let mut engine = Self {
            distances,
            options,
            selection,
            rng,
            population: Vec::new(),
            hall_of_fame: HallOfFame::new(archive_capacity)?,
            history: Vec::new(),
        };
        engine.evaluate(&mut population);
        engine.hall_of_fame.update(&population)?;
        engine.population = population;
        Ok(engine)
    }

    /// Runs the configured number of generations, invoking `on_generation`
    /// with each statistics record as it is emitted.
    ///
    /// # Errors
    ///
    /// Propagates selection and archive errors; with a configuration that
    /// built successfully these indicate a defect in the loop itself, not
    /// bad input.
    pub fn run<F>(&mut self, mut on_generation: F) -> Result<EvolutionSummary>
    where
        F: FnMut(&GenerationStats),
    {
        for generation in 1..=self.options.num_generations() {
            let mut offspring = self.selection.select(
                &self.population,
                self.options.population_size(),
                &mut self.rng,
            )?;

            self.recombine(&mut offspring);
            self.mutate(&mut offspring);
            self.evaluate(&mut offspring);

            self.hall_of_fame.update(&offspring)?;
            self.population = offspring;

            let stats = GenerationStats::from_population(generation, &self.population)?;
            debug!(
                generation,
                min = stats.min,
                mean = stats.mean,
                best_ever = self.hall_of_fame.best().and_then(Tour::fitness),
                "generation complete"
            );
            on_generation(&stats);
            self.history.push(stats);
        }

        let best = self
            .hall_of_fame
            .best()
            .cloned()
            .ok_or(EvolveError::EmptyPopulation)?;
        let length = best.fitness().ok_or_else(|| {
            EvolveError::UnevaluatedFitness("archived tour lost its fitness".to_string())
        })?;
        info!(length, "evolution finished");
        Ok(EvolutionSummary { tour: best, length })
    }

    /// Applies crossover to adjacent pairs in selection order, each pair
    /// independently with probability `crossover_rate`. An odd trailing
    /// individual passes through unpaired.
    fn recombine(&mut self, offspring: &mut [Tour]) {
        let operator = self.options.crossover();
        let rate = self.options.crossover_rate();

        if self.options.parallel() {
            // Decisions and worker seeds come off the master stream before
            // the fan-out, so a seeded run stays deterministic.
            let plans: Vec<Option<u64>> = offspring
                .chunks(2)
                .map(|pair| {
                    (pair.len() == 2 && self.rng.chance(rate)).then(|| self.rng.derive_seed())
                })
                .collect();

            offspring
                .par_chunks_mut(2)
                .zip(plans.into_par_iter())
                .for_each(|(pair, plan)| {
                    if let Some(seed) = plan {
                        let mut worker_rng = RandomNumberGenerator::from_seed(seed);
                        let (c1, c2) = operator.apply(&pair[0], &pair[1], &mut worker_rng);
                        pair[0] = c1;
                        pair[1] = c2;
                    }
                });
        } else {
            for pair in offspring.chunks_mut(2) {
                if pair.len() == 2 && self.rng.chance(rate) {
                    let (c1, c2) = operator.apply(&pair[0], &pair[1], &mut self.rng);
                    pair[0] = c1;
                    pair[1] = c2;
                }
            }
        }
    }

    /// Mutates each individual independently with probability
    /// `mutation_rate`.
    fn mutate(&mut self, offspring: &mut [Tour]) {
        let operator = self.options.mutation();
        let rate = self.options.mutation_rate();

        if self.options.parallel() {
            let plans: Vec<Option<u64>> = offspring
                .iter()
                .map(|_| self.rng.chance(rate).then(|| self.rng.derive_seed()))
                .collect();

            offspring
                .par_iter_mut()
                .zip(plans.into_par_iter())
                .for_each(|(individual, plan)| {
                    if let Some(seed) = plan {
                        let mut worker_rng = RandomNumberGenerator::from_seed(seed);
                        operator.apply(individual, &mut worker_rng);
                    }
                });
        } else {
            for individual in offspring.iter_mut() {
                if self.rng.chance(rate) {
                    operator.apply(individual, &mut self.rng);
                }
            }
        }
    }

    /// Recomputes fitness for individuals whose cache is unset or stale;
    /// untouched individuals keep their valid cache.
    fn evaluate(&self, offspring: &mut [Tour]) {
        if self.options.parallel() {
            offspring.par_iter_mut().for_each(|individual| {
                if individual.needs_evaluation() {
                    individual.set_fitness(self.distances.tour_length(individual.order()));
                }
            });
        } else {
            for individual in offspring.iter_mut() {
                if individual.needs_evaluation() {
                    individual.set_fitness(self.distances.tour_length(individual.order()));
                }
            }
        }
    }

    /// The best tour seen so far, live during a run.
    pub fn best(&self) -> Option<&Tour> {
        self.hall_of_fame.best()
    }

    /// The hall of fame archive.
    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Statistics of every completed generation, in order.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// The current population.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }
}
