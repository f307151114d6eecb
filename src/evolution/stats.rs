//! Per-generation fitness statistics.

use crate::error::{EvolveError, Result};
use crate::tour::Tour;

/// Summary of a population's fitness distribution at one generation
/// boundary, emitted to observers after replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation index, starting at 1 for the first evolved generation.
    pub generation: usize,
    /// Shortest tour length in the population.
    pub min: f64,
    /// Longest tour length in the population.
    pub max: f64,
    /// Mean tour length.
    pub mean: f64,
    /// Population standard deviation of tour length.
    pub std_dev: f64,
}

impl GenerationStats {
    /// Computes the statistics of a fully evaluated population.
    pub(crate) fn from_population(generation: usize, population: &[Tour]) -> Result<Self> {
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        let scores: Vec<f64> = population
            .iter()
            .enumerate()
            .map(|(i, tour)| {
                tour.fitness().ok_or_else(|| {
                    EvolveError::UnevaluatedFitness(format!(
                        "individual {} has no valid fitness at the generation boundary",
                        i
                    ))
                })
            })
            .collect::<Result<_>>()?;

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            generation,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}
