//! Bounded archive of the best individuals ever seen.

use crate::error::{EvolveError, Result};
use crate::tour::Tour;

/// A bounded, fitness-ascending archive of the best tours observed across
/// all generations.
///
/// Entries are independent clones: archived tours outlive the generation
/// that produced them. The archive is monotonic: once a tour strictly
/// better than the current worst entry has been seen, no later update can
/// push the archive's best fitness back up. A candidate whose visiting order
/// matches an existing entry is skipped, so the archive never stores the
/// same tour twice.
#[derive(Debug, Clone)]
pub struct HallOfFame {
    capacity: usize,
    entries: Vec<Tour>,
}

impl HallOfFame {
    /// Creates an empty archive holding at most `capacity` tours.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EvolveError::Configuration(
                "hall of fame capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        })
    }

    /// Offers every individual of a population to the archive.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate lacks a valid fitness; the engine
    /// only updates the archive after the re-evaluation step.
    pub fn update(&mut self, population: &[Tour]) -> Result<()> {
        for (i, tour) in population.iter().enumerate() {
            let score = tour.fitness().ok_or_else(|| {
                EvolveError::UnevaluatedFitness(format!(
                    "individual {} offered to the hall of fame without a valid fitness",
                    i
                ))
            })?;
            self.offer(tour, score);
        }
        Ok(())
    }

    fn offer(&mut self, tour: &Tour, score: f64) {
        if self.entries.len() == self.capacity {
            let worst = self.entries[self.entries.len() - 1]
                .fitness()
                .unwrap_or(f64::INFINITY);
            if score >= worst {
                return;
            }
        }
        if self.entries.iter().any(|e| e.order() == tour.order()) {
            return;
        }

        let at = self
            .entries
            .partition_point(|e| e.fitness().unwrap_or(f64::INFINITY) <= score);
        self.entries.insert(at, tour.clone());
        self.entries.truncate(self.capacity);
    }

    /// Returns the best tour seen so far, if any update has happened.
    pub fn best(&self) -> Option<&Tour> {
        self.entries.first()
    }

    /// Returns all archived tours, best first.
    pub fn entries(&self) -> &[Tour] {
        &self.entries
    }

    /// Returns the number of archived tours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been archived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
