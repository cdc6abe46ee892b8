//! Workbook Layout - Decodes the fixed tabular layout into ranking inputs.
//!
//! # Decision matrix sheet
//!
//! One row per alternative. Columns that are blank in every row are dropped
//! first; criterion `j` then occupies the four columns `4j..4j+4`, ordered
//! `mu_high, mu_low, nu_low, nu_high`.
//!
//! # Weights sheet
//!
//! One row per criterion with the same four-column order. Rows with any
//! blank cell are skipped.

use std::str::FromStr;
use tracing::debug;

use super::sheet::{Sheet, SheetRow, SheetSet};
use crate::config::WorkbookConfig;
use crate::domain::commute::CommuteCategory;
use crate::domain::fuzzy::Ivpfn;
use crate::ports::{AlternativeInput, DecisionInputs, IngestionError, WeightInput};

/// Number of columns per fuzzy judgment.
pub const COLUMNS_PER_JUDGMENT: usize = 4;

/// Sheet names and optional fixed dimensions of a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLayout {
    pub matrix_sheet: String,
    pub weights_sheet: String,
    pub expected_alternatives: Option<usize>,
    pub expected_criteria: Option<usize>,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self::from(&WorkbookConfig::default())
    }
}

impl From<&WorkbookConfig> for WorkbookLayout {
    fn from(config: &WorkbookConfig) -> Self {
        Self {
            matrix_sheet: config.matrix_sheet.clone(),
            weights_sheet: config.weights_sheet.clone(),
            expected_alternatives: config.expected_alternatives,
            expected_criteria: config.expected_criteria,
        }
    }
}

impl WorkbookLayout {
    /// Decodes both sheets into ranking inputs.
    pub fn decode(&self, mut sheets: SheetSet) -> Result<DecisionInputs, IngestionError> {
        let matrix = sheets
            .remove(&self.matrix_sheet)
            .ok_or_else(|| IngestionError::MissingSheet(self.matrix_sheet.clone()))?;
        let weights = sheets
            .remove(&self.weights_sheet)
            .ok_or_else(|| IngestionError::MissingSheet(self.weights_sheet.clone()))?;

        let inputs = DecisionInputs {
            alternatives: self.decode_matrix(&matrix)?,
            weights: self.decode_weights(&weights)?,
        };
        self.check_dimensions(&inputs)?;

        Ok(inputs)
    }

    fn decode_matrix(&self, sheet: &Sheet) -> Result<Vec<AlternativeInput>, IngestionError> {
        let rows: Vec<&SheetRow> = sheet.rows.iter().filter(|r| !r.is_blank()).collect();

        let columns: Vec<usize> = (0..sheet.width())
            .filter(|&c| rows.iter().any(|r| r.cell(c).is_some()))
            .collect();
        if columns.len() % COLUMNS_PER_JUDGMENT != 0 {
            return Err(IngestionError::layout(
                &self.matrix_sheet,
                format!(
                    "{} value columns remain after dropping empty columns, expected a multiple of {}",
                    columns.len(),
                    COLUMNS_PER_JUDGMENT
                ),
            ));
        }
        debug!(
            sheet = %self.matrix_sheet,
            dropped = sheet.width() - columns.len(),
            criteria = columns.len() / COLUMNS_PER_JUDGMENT,
            "Decoded decision matrix columns"
        );

        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                let values = columns
                    .iter()
                    .map(|&c| {
                        row.cell(c).ok_or_else(|| {
                            IngestionError::layout(
                                &self.matrix_sheet,
                                format!(
                                    "row {} ('{}') has an empty cell in column {}",
                                    index + 1,
                                    row.label,
                                    c + 1
                                ),
                            )
                        })
                    })
                    .collect::<Result<Vec<f64>, _>>()?;

                Ok(AlternativeInput {
                    label: row.label.clone(),
                    category: self.category_of(row)?,
                    judgments: judgments_from(&values),
                })
            })
            .collect()
    }

    fn decode_weights(&self, sheet: &Sheet) -> Result<Vec<WeightInput>, IngestionError> {
        let mut weights = Vec::with_capacity(sheet.rows.len());

        for (index, row) in sheet.rows.iter().enumerate() {
            let last_value = (COLUMNS_PER_JUDGMENT..row.cells.len())
                .filter(|&c| row.cell(c).is_some())
                .last();
            if let Some(last) = last_value {
                let present = row.cells.iter().filter(|c| c.is_some()).count();
                return Err(IngestionError::layout(
                    &self.weights_sheet,
                    format!(
                        "row {} ('{}') has {} values reaching column {}, expected {} columns",
                        index + 1,
                        row.label,
                        present,
                        last + 1,
                        COLUMNS_PER_JUDGMENT
                    ),
                ));
            }

            let values: Option<Vec<f64>> =
                (0..COLUMNS_PER_JUDGMENT).map(|c| row.cell(c)).collect();
            match values {
                Some(values) => weights.push(WeightInput {
                    label: row.label.clone(),
                    judgment: judgments_from(&values)[0],
                }),
                None => debug!(
                    sheet = %self.weights_sheet,
                    row = index + 1,
                    "Skipping weight row with blank cells"
                ),
            }
        }

        Ok(weights)
    }

    fn category_of(&self, row: &SheetRow) -> Result<CommuteCategory, IngestionError> {
        match &row.category {
            Some(tag) => CommuteCategory::from_str(tag)
                .map_err(|e| IngestionError::layout(&self.matrix_sheet, e.to_string())),
            None => Ok(CommuteCategory::from_known_label(&row.label)),
        }
    }

    fn check_dimensions(&self, inputs: &DecisionInputs) -> Result<(), IngestionError> {
        if let Some(expected) = self.expected_alternatives {
            if inputs.alternatives.len() != expected {
                return Err(IngestionError::layout(
                    &self.matrix_sheet,
                    format!(
                        "expected {} alternatives, found {}",
                        expected,
                        inputs.alternatives.len()
                    ),
                ));
            }
        }
        if let Some(expected) = self.expected_criteria {
            if inputs.criterion_count() != expected {
                return Err(IngestionError::layout(
                    &self.matrix_sheet,
                    format!(
                        "expected {} criteria, found {}",
                        expected,
                        inputs.criterion_count()
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn judgments_from(values: &[f64]) -> Vec<Ivpfn> {
    values
        .chunks_exact(COLUMNS_PER_JUDGMENT)
        .map(|c| Ivpfn::from_layout([c[0], c[1], c[2], c[3]]))
        .collect()
}
