//! Criteria Weights - Defuzzified, normalized criterion weights.

use serde::Serialize;

use super::AnalysisError;
use crate::domain::fuzzy::Ivpfn;

/// Normalized criterion weights. Entries sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CriteriaWeights(Vec<f64>);

impl CriteriaWeights {
    /// Defuzzifies each fuzzy weight and rescales the scores to sum to 1.
    ///
    /// # Errors
    /// `DegenerateWeights` if there are no weights or the raw scores do not
    /// sum to a positive finite number.
    pub fn normalize(fuzzy_weights: &[Ivpfn]) -> Result<Self, AnalysisError> {
        let raw: Vec<f64> = fuzzy_weights.iter().map(Ivpfn::score).collect();
        Self::from_raw(raw)
    }

    /// Rescales crisp weights to sum to 1.
    pub fn from_raw(raw: Vec<f64>) -> Result<Self, AnalysisError> {
        let sum: f64 = raw.iter().sum();
        if raw.is_empty() || !sum.is_finite() || sum <= 0.0 {
            return Err(AnalysisError::DegenerateWeights { sum });
        }

        Ok(Self(raw.into_iter().map(|w| w / sum).collect()))
    }

    /// Returns the weights in criterion order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights. Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the weights; 1 within floating-point tolerance.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Weight of one criterion.
    pub fn get(&self, criterion: usize) -> Option<f64> {
        self.0.get(criterion).copied()
    }
}
