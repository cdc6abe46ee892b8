//! Errors raised by the ranking engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failures of the scoring pipeline. No partial result accompanies any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion weights are degenerate: raw scores sum to {sum}")]
    DegenerateWeights { sum: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Score for alternative '{alternative}' is not a finite non-negative number")]
    NonFiniteScore { alternative: String },
}

impl AnalysisError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AnalysisError::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::ShapeMismatch {
                ref what,
                expected,
                actual,
            } => DomainError::new(ErrorCode::ShapeMismatch, err.to_string())
                .with_detail("what", what.clone())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            AnalysisError::DegenerateWeights { .. } => {
                DomainError::new(ErrorCode::DegenerateWeights, err.to_string())
            }
            AnalysisError::Validation(inner) => inner.into(),
            AnalysisError::NonFiniteScore { ref alternative } => {
                DomainError::new(ErrorCode::NonFiniteScore, err.to_string())
                    .with_detail("alternative", alternative.clone())
            }
        }
    }
}
