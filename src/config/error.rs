//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Matrix and weights sheets must have different names")]
    DuplicateSheetName,

    #[error("Expected dimension '{0}' must be greater than zero")]
    ZeroDimension(&'static str),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
