//! # Error Types
//!
//! Custom error types for the evolution library. Every fallible operation in
//! the crate returns [`Result`], with [`EvolveError`] variants covering the
//! failure scenarios that can occur before and during an evolutionary run.
//!
//! Configuration and scenario problems are rejected eagerly: a run that has
//! started never aborts on malformed input, because malformed input never
//! reaches the engine.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evotour::error::{EvolveError, Result};
//!
//! fn check_rate(rate: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(EvolveError::Configuration(format!(
//!             "rate must be in [0, 1], got {}",
//!             rate
//!         )));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to foreign errors:
//!
//! ```rust
//! use evotour::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_scenario(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open scenario file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the evolution library.
#[derive(Error, Debug)]
pub enum EvolveError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when scenario data is malformed or inconsistent.
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an individual is read before its fitness
    /// has been computed.
    #[error("Fitness error: {0}")]
    UnevaluatedFitness(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when a scenario document cannot be parsed.
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for evolution operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `EvolveError`.
pub type Result<T> = std::result::Result<T, EvolveError>;

/// Extension trait for Result to add context to errors.
///
/// Converts an arbitrary error into an [`EvolveError::Other`] carrying the
/// supplied context string alongside the original message.
///
/// ## Examples
///
/// ```rust
/// use evotour::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> evotour::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| EvolveError::Other(format!("{}: {}", context, e)))
    }
}
