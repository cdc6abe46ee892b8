//! Raw sheet representation as it appears in a workbook file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All sheets of a workbook keyed by sheet name.
pub type SheetSet = BTreeMap<String, Sheet>;

/// One sheet: labelled rows of optional numeric cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

/// One labelled row. `None` cells are blanks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(default)]
    pub label: String,
    /// Optional category tag (e.g. `public_transit`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub cells: Vec<Option<f64>>,
}

impl SheetRow {
    /// Creates a row with every cell present.
    pub fn new(label: impl Into<String>, cells: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            category: None,
            cells: cells.into_iter().map(Some).collect(),
        }
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if the row has neither a label nor any value.
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.cells.iter().all(Option::is_none)
    }

    /// Cell at `column`, treating cells past the row end as blank.
    pub fn cell(&self, column: usize) -> Option<f64> {
        self.cells.get(column).copied().flatten()
    }
}

impl Sheet {
    /// Creates a sheet from rows.
    pub fn new(rows: Vec<SheetRow>) -> Self {
        Self { rows }
    }

    /// Widest row length.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}
