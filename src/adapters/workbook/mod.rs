//! Workbook adapters - Ingestion of decision matrices and weights.
//!
//! Implements `WorkbookReader` for YAML/JSON workbook exports and decodes
//! the fixed four-columns-per-judgment tabular layout.

mod layout;
mod sheet;
mod yaml_reader;

pub use layout::{WorkbookLayout, COLUMNS_PER_JUDGMENT};
pub use sheet::{Sheet, SheetRow, SheetSet};
pub use yaml_reader::YamlWorkbookReader;
