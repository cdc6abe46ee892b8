//! Ranking handlers.

mod rank_alternatives;

pub use rank_alternatives::{
    rank_inputs, RankAlternativesCommand, RankAlternativesHandler, RankingFailure, RankingReport,
    Winner,
};
