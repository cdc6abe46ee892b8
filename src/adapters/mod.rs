//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `workbook` - Workbook readers (YAML/JSON) and the tabular layout decoder

pub mod workbook;

pub use workbook::{WorkbookLayout, YamlWorkbookReader};
