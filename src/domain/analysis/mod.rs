//! Analysis Module - Pure domain services for fuzzy multi-criteria ranking.
//!
//! This module contains stateless functions that turn a decision matrix of
//! fuzzy judgments and a vector of fuzzy criterion weights into a ranking.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria grid of IVPFN judgments
//! - `CriteriaWeights` - Defuzzified weights normalized to sum to 1
//! - `WispAnalyzer` - Weighted sum / weighted product blend and ranking
//! - `Ranking` - Alternatives sorted by descending score
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod decision_matrix;
mod errors;
mod ranking;
mod weights;
mod wisp_analyzer;

// Re-export all public types
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use errors::AnalysisError;
pub use ranking::{RankedAlternative, Ranking, WispScore};
pub use weights::CriteriaWeights;
pub use wisp_analyzer::{ValidationMode, WispAnalyzer, WISP_SUM_SHARE};
