//! Workbook Reader Port - Decision data ingestion interface.
//!
//! This port defines the contract for extracting ranking inputs from an
//! external tabular representation. The application depends on this trait,
//! while adapters (like YamlWorkbookReader) provide the implementation.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::commute::CommuteCategory;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::fuzzy::Ivpfn;

/// Port for reading decision inputs from a workbook.
///
/// # Contract
///
/// Implementations must:
/// - Return alternatives in workbook order, one judgment per criterion each
/// - Return one fuzzy weight per criterion, in criterion order
/// - Report every read or layout failure as `IngestionError`, never panic
///
/// Implementations do not validate the fuzzy constraints; that is the
/// ranking engine's job.
pub trait WorkbookReader: Send + Sync {
    /// Reads the decision matrix and criterion weights from `path`.
    fn read(&self, path: &Path) -> Result<DecisionInputs, IngestionError>;
}

/// One alternative row of the decision matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeInput {
    pub label: String,
    pub category: CommuteCategory,
    /// Judgments in criterion order.
    pub judgments: Vec<Ivpfn>,
}

/// One criterion and its fuzzy weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightInput {
    pub label: String,
    pub judgment: Ivpfn,
}

/// Everything the ranking engine needs from one workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionInputs {
    pub alternatives: Vec<AlternativeInput>,
    pub weights: Vec<WeightInput>,
}

impl DecisionInputs {
    /// Number of criteria judged in the matrix; falls back to the weight count
    /// when there are no alternatives.
    pub fn criterion_count(&self) -> usize {
        self.alternatives
            .first()
            .map(|a| a.judgments.len())
            .unwrap_or(self.weights.len())
    }
}

/// Errors raised while reading a workbook.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestionError {
    #[error("Workbook not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Workbook is malformed: {0}")]
    Malformed(String),

    #[error("Workbook is missing the '{0}' sheet")]
    MissingSheet(String),

    #[error("Layout error in sheet '{sheet}': {reason}")]
    Layout { sheet: String, reason: String },
}

impl IngestionError {
    /// Creates a layout error.
    pub fn layout(sheet: impl Into<String>, reason: impl Into<String>) -> Self {
        IngestionError::Layout {
            sheet: sheet.into(),
            reason: reason.into(),
        }
    }
}

impl From<IngestionError> for DomainError {
    fn from(err: IngestionError) -> Self {
        let code = match &err {
            IngestionError::NotFound(_) => ErrorCode::WorkbookNotFound,
            IngestionError::Io(_) => ErrorCode::WorkbookUnreadable,
            IngestionError::Malformed(_)
            | IngestionError::MissingSheet(_)
            | IngestionError::Layout { .. } => ErrorCode::WorkbookMalformed,
        };
        DomainError::new(code, err.to_string())
    }
}
