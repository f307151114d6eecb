pub mod elitist_rank;
pub mod selection_strategy;
pub mod tournament;

pub use elitist_rank::ElitistRankRouletteSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
