//! WISP Analyzer - Weighted integrated sum-product scoring and ranking.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, CriteriaWeights, DecisionMatrix, Ranking, WispScore};
use crate::domain::foundation::AlternativeId;
use crate::domain::fuzzy::Ivpfn;

/// Share of the weighted sum in the blended score; the weighted product gets the rest.
pub const WISP_SUM_SHARE: f64 = 0.5;

/// Whether judgments are checked before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Every cell and weight must be in range and satisfy the Pythagorean bound.
    #[default]
    Strict,
    /// Judgments are scored as given.
    Permissive,
}

/// WISP scoring functions.
pub struct WispAnalyzer;

impl WispAnalyzer {
    /// Validates (per `mode`), normalizes the fuzzy weights, and ranks the matrix.
    ///
    /// # Errors
    /// Any error of [`WispAnalyzer::validated_weights`], then
    /// `NonFiniteScore` if a crisp score cannot enter the weighted product.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        fuzzy_weights: &[Ivpfn],
        mode: ValidationMode,
    ) -> Result<Ranking, AnalysisError> {
        let weights = Self::validated_weights(matrix, fuzzy_weights, mode)?;
        Self::rank_matrix(matrix, &weights)
    }

    /// Checks the inputs (per `mode`) and returns the normalized weights
    /// ready for [`WispAnalyzer::rank_matrix`].
    ///
    /// # Errors
    /// - `ShapeMismatch` if the weight count differs from the criterion count
    /// - `Validation` in strict mode, naming the first invalid cell or weight
    /// - `DegenerateWeights` if the weight scores sum to zero
    pub fn validated_weights(
        matrix: &DecisionMatrix,
        fuzzy_weights: &[Ivpfn],
        mode: ValidationMode,
    ) -> Result<CriteriaWeights, AnalysisError> {
        if fuzzy_weights.len() != matrix.criterion_count() {
            return Err(AnalysisError::shape_mismatch(
                "weights",
                matrix.criterion_count(),
                fuzzy_weights.len(),
            ));
        }

        if mode == ValidationMode::Strict {
            matrix.validate()?;
            for (criterion, weight) in matrix.criteria().iter().zip(fuzzy_weights) {
                weight.validate(&format!("weight/{}", criterion))?;
            }
        }

        CriteriaWeights::normalize(fuzzy_weights)
    }

    /// Scores and ranks every alternative of the matrix.
    pub fn rank_matrix(
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
    ) -> Result<Ranking, AnalysisError> {
        let components = Self::wisp_components(matrix, weights)?;
        Ok(Ranking::from_input_order(
            matrix
                .alternatives()
                .iter()
                .cloned()
                .zip(components)
                .map(|(id, score)| (id, score.final_score, Some(score)))
                .collect(),
        ))
    }

    /// Computes the blended WISP score for each alternative.
    ///
    /// # Algorithm
    /// For each alternative, with `c[i]` the crisp score of criterion `i`:
    /// - weighted_sum = Σ w[i]·c[i]
    /// - weighted_product = Π c[i]^w[i], with 0^0 taken as 1
    /// - final = 0.5·(weighted_sum + weighted_product)
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty Vec
    /// - Zero crisp score with positive weight: product is 0
    pub fn wisp_components(
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
    ) -> Result<Vec<WispScore>, AnalysisError> {
        if weights.len() != matrix.criterion_count() {
            return Err(AnalysisError::shape_mismatch(
                "weights",
                matrix.criterion_count(),
                weights.len(),
            ));
        }

        matrix
            .rows()
            .map(|(alternative, row)| Self::score_row(alternative, row, weights.as_slice()))
            .collect()
    }

    /// Final scores only, in input order.
    pub fn compute_scores(
        matrix: &DecisionMatrix,
        weights: &CriteriaWeights,
    ) -> Result<Vec<f64>, AnalysisError> {
        Ok(Self::wisp_components(matrix, weights)?
            .into_iter()
            .map(|score| score.final_score)
            .collect())
    }

    /// Pairs labels with scores and sorts descending, keeping input order on ties.
    pub fn rank(alternatives: &[AlternativeId], scores: &[f64]) -> Result<Ranking, AnalysisError> {
        if alternatives.len() != scores.len() {
            return Err(AnalysisError::shape_mismatch(
                "alternative labels",
                scores.len(),
                alternatives.len(),
            ));
        }

        if let Some((alternative, _)) = alternatives
            .iter()
            .zip(scores)
            .find(|(_, score)| !score.is_finite())
        {
            return Err(AnalysisError::NonFiniteScore {
                alternative: alternative.to_string(),
            });
        }

        Ok(Ranking::from_input_order(
            alternatives
                .iter()
                .cloned()
                .zip(scores.iter().copied())
                .map(|(id, score)| (id, score, None))
                .collect(),
        ))
    }

    fn score_row(
        alternative: &AlternativeId,
        row: &[Ivpfn],
        weights: &[f64],
    ) -> Result<WispScore, AnalysisError> {
        let mut weighted_sum = 0.0;
        let mut weighted_product = 1.0;

        for (cell, &weight) in row.iter().zip(weights) {
            let crisp = cell.score();
            if !crisp.is_finite() || crisp < 0.0 {
                return Err(AnalysisError::NonFiniteScore {
                    alternative: alternative.to_string(),
                });
            }

            weighted_sum += weight * crisp;
            weighted_product *= Self::weighted_power(crisp, weight);
        }

        let final_score = WISP_SUM_SHARE * weighted_sum + (1.0 - WISP_SUM_SHARE) * weighted_product;
        if !final_score.is_finite() {
            return Err(AnalysisError::NonFiniteScore {
                alternative: alternative.to_string(),
            });
        }

        Ok(WispScore {
            weighted_sum,
            weighted_product,
            final_score,
        })
    }

    fn weighted_power(crisp: f64, weight: f64) -> f64 {
        if weight == 0.0 {
            1.0
        } else {
            crisp.powf(weight)
        }
    }
}
