//! # Scenario files
//!
//! A scenario is a JSON document describing a concrete problem instance:
//! the location coordinates, their pairwise distance matrix, and the known
//! optimal tour for benchmarking against.
//!
//! ```json
//! {
//!   "positions": [[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]],
//!   "distances": [[0.0, 3.0, 5.0], [3.0, 0.0, 4.0], [5.0, 4.0, 0.0]],
//!   "optimal_distance": 12.0,
//!   "optimal_order": [0, 1, 2]
//! }
//! ```
//!
//! Documents are validated immediately after parsing; a malformed or
//! size-mismatched scenario never reaches the engine.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceModel;
use crate::error::{EvolveError, Result};
use crate::rng::RandomNumberGenerator;

/// A parsed and validated problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// 2-D coordinates of each location.
    pub positions: Vec<(f64, f64)>,
    /// Pairwise distances; symmetric, matching `positions` in size.
    pub distances: Vec<Vec<f64>>,
    /// Length of the known optimal closed tour.
    pub optimal_distance: f64,
    /// Visiting order of the known optimal tour.
    pub optimal_order: Vec<usize>,
}

impl Scenario {
    /// Reads and validates a scenario from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads and validates a scenario from any reader of JSON text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let scenario: Scenario = serde_json::from_reader(reader)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the document's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Scenario`] when the distance matrix does not
    /// match the location count (or is itself invalid), or when the optimal
    /// order is not a permutation of the locations.
    pub fn validate(&self) -> Result<()> {
        let n = self.positions.len();
        if n == 0 {
            return Err(EvolveError::Scenario(
                "scenario contains no locations".to_string(),
            ));
        }
        if self.distances.len() != n {
            return Err(EvolveError::Scenario(format!(
                "distance matrix has {} rows for {} locations",
                self.distances.len(),
                n
            )));
        }
        // Delegates the matrix checks (square, symmetric, non-negative,
        // zero diagonal); dimension mismatches were caught above.
        DistanceModel::from_matrix(&self.distances)?;

        if self.optimal_order.len() != n {
            return Err(EvolveError::Scenario(format!(
                "optimal order visits {} locations, expected {}",
                self.optimal_order.len(),
                n
            )));
        }
        let mut seen = vec![false; n];
        for &v in &self.optimal_order {
            if v >= n || seen[v] {
                return Err(EvolveError::Scenario(format!(
                    "optimal order is not a permutation of 0..{}",
                    n
                )));
            }
            seen[v] = true;
        }
        if !self.optimal_distance.is_finite() || self.optimal_distance < 0.0 {
            return Err(EvolveError::Scenario(format!(
                "optimal distance must be finite and non-negative, got {}",
                self.optimal_distance
            )));
        }
        Ok(())
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the scenario has no locations. Validation rejects
    /// such documents, so a loaded scenario always answers `false`.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Builds the distance model the engine evolves against.
    pub fn into_distance_model(self) -> Result<DistanceModel> {
        DistanceModel::from_matrix(&self.distances)
    }
}

/// Generates `count` random locations on the integer grid
/// `[min, max] x [min, max]`, the way ad-hoc instances are produced when no
/// scenario file is supplied.
pub fn random_positions(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut RandomNumberGenerator,
) -> Vec<(f64, f64)> {
    let span = (max - min + 1) as usize;
    (0..count)
        .map(|_| {
            let x = min + rng.index(span) as i64;
            let y = min + rng.index(span) as i64;
            (x as f64, y as f64)
        })
        .collect()
}
