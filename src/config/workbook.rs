//! Workbook layout configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Workbook layout configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkbookConfig {
    /// Name of the sheet holding the decision matrix
    #[serde(default = "default_matrix_sheet")]
    pub matrix_sheet: String,

    /// Name of the sheet holding the criterion weights
    #[serde(default = "default_weights_sheet")]
    pub weights_sheet: String,

    /// Required number of alternatives, if the dataset has a fixed shape
    pub expected_alternatives: Option<usize>,

    /// Required number of criteria, if the dataset has a fixed shape
    pub expected_criteria: Option<usize>,
}

impl WorkbookConfig {
    /// Validate workbook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.matrix_sheet.trim().is_empty() {
            return Err(ValidationError::MissingRequired("workbook.matrix_sheet"));
        }
        if self.weights_sheet.trim().is_empty() {
            return Err(ValidationError::MissingRequired("workbook.weights_sheet"));
        }
        if self.matrix_sheet == self.weights_sheet {
            return Err(ValidationError::DuplicateSheetName);
        }
        if self.expected_alternatives == Some(0) {
            return Err(ValidationError::ZeroDimension("expected_alternatives"));
        }
        if self.expected_criteria == Some(0) {
            return Err(ValidationError::ZeroDimension("expected_criteria"));
        }
        Ok(())
    }
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            matrix_sheet: default_matrix_sheet(),
            weights_sheet: default_weights_sheet(),
            expected_alternatives: None,
            expected_criteria: None,
        }
    }
}

fn default_matrix_sheet() -> String {
    "decision_matrix".to_string()
}

fn default_weights_sheet() -> String {
    "weights".to_string()
}
