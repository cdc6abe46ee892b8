//! Command handlers.

pub mod ranking;

pub use ranking::{
    rank_inputs, RankAlternativesCommand, RankAlternativesHandler, RankingFailure, RankingReport,
    Winner,
};
