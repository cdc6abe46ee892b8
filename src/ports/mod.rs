//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Ingestion Ports
//!
//! - `WorkbookReader` - Extracts the decision matrix and criterion weights
//!   from an external tabular representation

mod workbook_reader;

pub use workbook_reader::{
    AlternativeInput, DecisionInputs, IngestionError, WeightInput, WorkbookReader,
};
