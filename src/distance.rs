//! # Distance Model
//!
//! The [`DistanceModel`] is the immutable pairwise distance table every
//! fitness evaluation reads. It is built once, from an explicit matrix or
//! from 2-D coordinates, validated at construction, and never mutated
//! afterwards, so the engine and any number of workers can share it freely.
//!
//! ## Example
//!
//! ```rust
//! use evotour::distance::DistanceModel;
//!
//! // Four locations at the corners of a unit square.
//! let model = DistanceModel::from_coordinates(&[
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (1.0, 1.0),
//!     (0.0, 1.0),
//! ]).unwrap();
//!
//! // Walking the perimeter is the optimal closed tour.
//! assert!((model.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-9);
//! ```

use crate::error::{EvolveError, Result};

/// An immutable symmetric table of pairwise distances over N locations.
///
/// Stored as a flat row-major `Vec<f64>` of length N·N. All entries are
/// non-negative, the diagonal is zero and `distance(i, j) == distance(j, i)`;
/// these invariants are checked once at construction and assumed everywhere
/// else.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceModel {
    size: usize,
    table: Vec<f64>,
}

impl DistanceModel {
    /// Builds a distance model from a full N×N matrix.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Scenario`] if the matrix is empty, not square,
    /// asymmetric, carries a non-zero diagonal, or contains a negative or
    /// non-finite entry.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> Result<Self> {
        let size = matrix.len();
        if size == 0 {
            return Err(EvolveError::Scenario(
                "distance matrix must cover at least one location".to_string(),
            ));
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != size {
                return Err(EvolveError::Scenario(format!(
                    "distance matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
        }

        let mut table = Vec::with_capacity(size * size);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(EvolveError::Scenario(format!(
                        "distance[{}][{}] must be finite and non-negative, got {}",
                        i, j, d
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(EvolveError::Scenario(format!(
                        "distance[{}][{}] must be zero on the diagonal, got {}",
                        i, j, d
                    )));
                }
                if matrix[j][i] != d {
                    return Err(EvolveError::Scenario(format!(
                        "distance matrix is asymmetric at ({}, {}): {} vs {}",
                        i, j, d, matrix[j][i]
                    )));
                }
                table.push(d);
            }
        }

        Ok(Self { size, table })
    }

    /// Builds a distance model from 2-D coordinates using Euclidean distance.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Scenario`] if `positions` is empty or contains
    /// a non-finite coordinate.
    pub fn from_coordinates(positions: &[(f64, f64)]) -> Result<Self> {
        let size = positions.len();
        if size == 0 {
            return Err(EvolveError::Scenario(
                "at least one location is required".to_string(),
            ));
        }
        for (i, &(x, y)) in positions.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(EvolveError::Scenario(format!(
                    "position {} has a non-finite coordinate ({}, {})",
                    i, x, y
                )));
            }
        }

        let mut table = Vec::with_capacity(size * size);
        for &(xi, yi) in positions {
            for &(xj, yj) in positions {
                table.push(((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt());
            }
        }

        Ok(Self { size, table })
    }

    /// Returns the number of locations N.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the model covers no locations.
    ///
    /// Construction rejects empty models, so this is always `false` for a
    /// built value; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the distance between locations `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range. Tours are permutations of
    /// `[0, N)` by construction, so in-crate callers never index out of range.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "location index out of range");
        self.table[i * self.size + j]
    }

    /// Scores a closed tour: the sum of consecutive leg distances plus the
    /// return leg from the last location to the first.
    ///
    /// This is the fitness evaluator: O(N), reading only the immutable table.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let mut total = self.distance(order[order.len() - 1], order[0]);
        for pair in order.windows(2) {
            total += self.distance(pair[0], pair[1]);
        }
        total
    }
}
