//! YAML Workbook Reader Adapter
//!
//! Reads a workbook exported as YAML (or JSON, which parses as YAML) with
//! one top-level key per sheet.
//!
//! ```yaml
//! decision_matrix:
//!   rows:
//!     - label: Public Transport
//!       category: public_transit
//!       cells: [0.7, 0.6, 0.2, 0.3, 0.8, 0.7, 0.1, 0.2]
//! weights:
//!   rows:
//!     - label: Cost
//!       cells: [0.8, 0.7, 0.1, 0.2]
//!     - label: Travel time
//!       cells: [0.6, 0.5, 0.3, 0.4]
//! ```

use std::fs;
use std::path::Path;
use tracing::debug;

use super::layout::WorkbookLayout;
use super::sheet::SheetSet;
use crate::ports::{DecisionInputs, IngestionError, WorkbookReader};

/// File-based workbook reader for YAML and JSON documents
#[derive(Debug, Clone, Default)]
pub struct YamlWorkbookReader {
    layout: WorkbookLayout,
}

impl YamlWorkbookReader {
    /// Create a reader for the given layout
    pub fn new(layout: WorkbookLayout) -> Self {
        Self { layout }
    }

    /// Decode a workbook document held in memory
    pub fn read_str(&self, content: &str) -> Result<DecisionInputs, IngestionError> {
        let sheets: SheetSet = serde_yaml::from_str(content)
            .map_err(|e| IngestionError::Malformed(e.to_string()))?;

        self.layout.decode(sheets)
    }
}

impl WorkbookReader for YamlWorkbookReader {
    fn read(&self, path: &Path) -> Result<DecisionInputs, IngestionError> {
        if !path.exists() {
            return Err(IngestionError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| IngestionError::Io(e.to_string()))?;
        debug!(path = %path.display(), bytes = content.len(), "Read workbook");

        self.read_str(&content)
    }
}
