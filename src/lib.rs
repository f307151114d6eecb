//! # evotour
//!
//! A generational genetic algorithm for the travelling-salesman problem.
//!
//! Candidate solutions are tours: permutations of the location indices,
//! scored by closed-tour length against an immutable [`distance::DistanceModel`].
//! The [`evolution::EvolutionEngine`] evolves a fixed-size population through
//! selection, permutation-preserving crossover ([`crossover::Crossover`]),
//! mutation ([`mutation::Mutation`]) and re-evaluation, archiving the best
//! tours ever seen in a [`evolution::HallOfFame`] and emitting per-generation
//! statistics to observers.
//!
//! Every operator guarantees, by construction, that its output visits each
//! location exactly once; invalid configurations and malformed scenario data
//! are rejected before a single generation runs.

pub mod crossover;
pub mod distance;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod report;
pub mod rng;
pub mod scenario;
pub mod selection;
pub mod tour;

// Re-export commonly used types for convenience
pub use error::{EvolveError, Result, ResultExt};
