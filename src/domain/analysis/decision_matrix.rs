//! Decision Matrix - Alternatives x criteria grid of fuzzy judgments.

use serde::Serialize;
use std::collections::HashSet;

use super::AnalysisError;
use crate::domain::foundation::{AlternativeId, CriterionId, ValidationError};
use crate::domain::fuzzy::Ivpfn;

/// The decision matrix mapping alternatives x criteria to IVPFN judgments.
///
/// Every row holds exactly one judgment per criterion, and alternative and
/// criterion labels are unique. Both are checked by
/// [`DecisionMatrixBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<AlternativeId>,
    criteria: Vec<CriterionId>,
    rows: Vec<Vec<Ivpfn>>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Ordered alternative labels.
    pub fn alternatives(&self) -> &[AlternativeId] {
        &self.alternatives
    }

    /// Ordered criterion labels.
    pub fn criteria(&self) -> &[CriterionId] {
        &self.criteria
    }

    /// Iterates over `(alternative, row)` pairs in input order.
    pub fn rows(&self) -> impl Iterator<Item = (&AlternativeId, &[Ivpfn])> {
        self.alternatives
            .iter()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Gets a cell by alternative and criterion position.
    pub fn get_cell(&self, alternative: usize, criterion: usize) -> Option<&Ivpfn> {
        self.rows.get(alternative)?.get(criterion)
    }

    /// Gets a cell by alternative and criterion labels.
    pub fn find_cell(&self, alternative: &str, criterion: &str) -> Option<&Ivpfn> {
        let a = self.alternatives.iter().position(|id| id.as_str() == alternative)?;
        let c = self.criteria.iter().position(|id| id.as_str() == criterion)?;
        self.get_cell(a, c)
    }

    /// Crisp score of every cell, row by row.
    pub fn crisp_scores(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Ivpfn::score).collect())
            .collect()
    }

    /// Validates every cell, naming the first offender as `alternative/criterion`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (alternative, row) in self.rows() {
            for (criterion, cell) in self.criteria.iter().zip(row) {
                cell.validate(&format!("{}/{}", alternative, criterion))?;
            }
        }
        Ok(())
    }

    /// Cells that fail validation, as `(alternative, criterion)` positions.
    pub fn invalid_cells(&self) -> Vec<(usize, usize)> {
        let mut invalid = Vec::new();
        for (a, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_valid() {
                    invalid.push((a, c));
                }
            }
        }
        invalid
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<String>,
    rows: Vec<(String, Vec<Ivpfn>)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria.
    pub fn criteria(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.criteria = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets criteria labelled `C1..=Cn`.
    pub fn numbered_criteria(mut self, count: usize) -> Self {
        self.criteria = (1..=count).map(|i| format!("C{}", i)).collect();
        self
    }

    /// Appends an alternative with its judgments in criterion order.
    pub fn alternative(mut self, label: impl Into<String>, row: Vec<Ivpfn>) -> Self {
        self.rows.push((label.into(), row));
        self
    }

    /// Builds the decision matrix.
    ///
    /// # Errors
    /// - `Validation` for blank or duplicate labels
    /// - `ShapeMismatch` if any row length differs from the criterion count
    pub fn build(self) -> Result<DecisionMatrix, AnalysisError> {
        let criteria = self
            .criteria
            .into_iter()
            .map(CriterionId::try_new)
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique(criteria.iter().map(CriterionId::as_str), "criterion")?;

        let mut alternatives = Vec::with_capacity(self.rows.len());
        let mut rows = Vec::with_capacity(self.rows.len());

        for (label, row) in self.rows {
            let id = AlternativeId::try_new(label)?;
            if row.len() != criteria.len() {
                return Err(AnalysisError::shape_mismatch(
                    format!("row '{}'", id),
                    criteria.len(),
                    row.len(),
                ));
            }
            alternatives.push(id);
            rows.push(row);
        }
        ensure_unique(alternatives.iter().map(AlternativeId::as_str), "alternative")?;

        Ok(DecisionMatrix {
            alternatives,
            criteria,
            rows,
        })
    }
}

fn ensure_unique<'a>(
    labels: impl Iterator<Item = &'a str>,
    field: &str,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(ValidationError::invalid_format(
                field,
                format!("duplicate label '{}'", label),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(score_hint: f64) -> Ivpfn {
        Ivpfn::new(score_hint, score_hint, 0.1, 0.1)
    }

    #[test]
    fn empty_matrix_has_no_alternatives() {
        let matrix = DecisionMatrix::builder().build().unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.alternative_count(), 0);
        assert_eq!(matrix.criterion_count(), 0);
    }

    #[test]
    fn builder_creates_matrix_with_alternatives() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Time"])
            .alternative("A", vec![cell(0.5), cell(0.6)])
            .alternative("B", vec![cell(0.7), cell(0.8)])
            .alternative("C", vec![cell(0.2), cell(0.3)])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 3);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.alternatives()[1].as_str(), "B");
    }

    #[test]
    fn numbered_criteria_labels() {
        let matrix = DecisionMatrix::builder()
            .numbered_criteria(3)
            .alternative("A", vec![cell(0.5); 3])
            .build()
            .unwrap();

        let labels: Vec<_> = matrix.criteria().iter().map(CriterionId::as_str).collect();
        assert_eq!(labels, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn get_cell_by_position_and_label() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Time"])
            .alternative("A", vec![cell(0.5), cell(0.6)])
            .build()
            .unwrap();

        assert_eq!(matrix.get_cell(0, 1), Some(&cell(0.6)));
        assert_eq!(matrix.find_cell("A", "Cost"), Some(&cell(0.5)));
        assert!(matrix.get_cell(1, 0).is_none());
        assert!(matrix.find_cell("A", "Comfort").is_none());
    }

    #[test]
    fn short_row_is_shape_mismatch() {
        let result = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Time", "Safety"])
            .alternative("A", vec![cell(0.5), cell(0.6), cell(0.7)])
            .alternative("B", vec![cell(0.5), cell(0.6)])
            .build();

        assert_eq!(
            result,
            Err(AnalysisError::shape_mismatch("row 'B'", 3, 2))
        );
    }

    #[test]
    fn duplicate_alternative_rejected() {
        let result = DecisionMatrix::builder()
            .criteria(vec!["Cost"])
            .alternative("Walking", vec![cell(0.5)])
            .alternative("Walking", vec![cell(0.6)])
            .build();

        assert!(matches!(
            result,
            Err(AnalysisError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn blank_criterion_rejected() {
        let result = DecisionMatrix::builder()
            .criteria(vec!["Cost", " "])
            .build();

        assert_eq!(
            result,
            Err(AnalysisError::Validation(ValidationError::empty_field("criterion")))
        );
    }

    #[test]
    fn crisp_scores_follow_rows() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Time"])
            .alternative("A", vec![Ivpfn::new(0.5, 0.5, 0.5, 0.5), Ivpfn::new(0.9, 0.9, 0.1, 0.1)])
            .build()
            .unwrap();

        let crisp = matrix.crisp_scores();
        assert!((crisp[0][0] - 0.5).abs() < 1e-12);
        assert!((crisp[0][1] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn validate_names_offending_cell() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost", "Time"])
            .alternative("A", vec![cell(0.5), cell(0.6)])
            .alternative("B", vec![cell(0.5), Ivpfn::new(0.9, 0.95, 0.5, 0.5)])
            .build()
            .unwrap();

        match matrix.validate() {
            Err(err) => assert_eq!(err.field(), "B/Time"),
            Ok(()) => panic!("Expected validation failure"),
        }
        assert_eq!(matrix.invalid_cells(), vec![(1, 1)]);
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Cost"])
            .alternative("A", vec![cell(0.5)])
            .build()
            .unwrap();

        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("alternatives"));
        assert!(json.contains("criteria"));
    }
}
