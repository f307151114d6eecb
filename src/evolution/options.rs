//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the validated configuration of an
//! evolutionary run: generation and population counts, the crossover and
//! mutation operators with their application rates, an optional seed, and
//! the parallel-execution flag.
//!
//! Values are checked once, at build time. Out-of-range rates are rejected,
//! never clamped; a configuration that builds successfully never aborts the
//! engine mid-run.
//!
//! ## Example
//!
//! ```rust
//! use evotour::evolution::EvolutionOptions;
//! use evotour::crossover::Crossover;
//! use evotour::mutation::Mutation;
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .population_size(50)
//!     .crossover(Crossover::Order, 0.85)
//!     .mutation(Mutation::Inversion, 0.15)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.population_size(), 50);
//! ```

use crate::crossover::Crossover;
use crate::error::{EvolveError, Result};
use crate::mutation::Mutation;

/// Validated configuration for an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    crossover: Crossover,
    crossover_rate: f64,
    mutation: Mutation,
    mutation_rate: f64,
    seed: Option<u64>,
    parallel: bool,
}

impl EvolutionOptions {
    /// Returns a builder with the default parameters.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// The number of generations the engine runs. Zero is valid: the initial
    /// population is still created, evaluated and archived.
    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    /// The fixed population size, at least 2.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The crossover operator applied to selected pairs.
    pub fn crossover(&self) -> Crossover {
        self.crossover
    }

    /// The per-pair probability of applying crossover.
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// The mutation operator applied to selected individuals.
    pub fn mutation(&self) -> Mutation {
        self.mutation
    }

    /// The per-individual probability of applying mutation.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The deterministic seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether per-individual work is mapped across rayon workers.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 50,
            crossover: Crossover::Order,
            crossover_rate: 0.8,
            mutation: Mutation::Swap,
            mutation_rate: 0.05,
            seed: None,
            parallel: false,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface; `build` performs the validation.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    crossover: Option<(Crossover, f64)>,
    mutation: Option<(Mutation, f64)>,
    seed: Option<u64>,
    parallel: Option<bool>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the crossover operator and its per-pair application rate.
    pub fn crossover(mut self, operator: Crossover, rate: f64) -> Self {
        self.crossover = Some((operator, rate));
        self
    }

    /// Sets the mutation operator and its per-individual application rate.
    pub fn mutation(mut self, operator: Mutation, rate: f64) -> Self {
        self.mutation = Some((operator, rate));
        self
    }

    /// Sets a deterministic seed. Two runs with the same seed and
    /// configuration produce identical results.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Enables or disables the parallel execution mode.
    pub fn parallel(mut self, value: bool) -> Self {
        self.parallel = Some(value);
        self
    }

    /// Builds the options, validating every parameter.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population size is below 2 or
    /// either rate lies outside `[0, 1]`. Rates are rejected, not clamped.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let population_size = self.population_size.unwrap_or(defaults.population_size);
        let (crossover, crossover_rate) = self
            .crossover
            .unwrap_or((defaults.crossover, defaults.crossover_rate));
        let (mutation, mutation_rate) = self
            .mutation
            .unwrap_or((defaults.mutation, defaults.mutation_rate));

        if population_size < 2 {
            return Err(EvolveError::Configuration(format!(
                "population size must be at least 2 for pairwise crossover, got {}",
                population_size
            )));
        }
        for (name, rate) in [("crossover", crossover_rate), ("mutation", mutation_rate)] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(EvolveError::Configuration(format!(
                    "{} rate must be in [0, 1], got {}",
                    name, rate
                )));
            }
        }

        Ok(EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size,
            crossover,
            crossover_rate,
            mutation,
            mutation_rate,
            seed: self.seed,
            parallel: self.parallel.unwrap_or(defaults.parallel),
        })
    }
}
