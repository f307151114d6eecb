pub mod engine;
pub mod hall_of_fame;
pub mod options;
pub mod stats;

pub use engine::{EvolutionEngine, EvolutionSummary};
pub use hall_of_fame::HallOfFame;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
pub use stats::GenerationStats;
