//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `IVPF_WISP` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ivpf_wisp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading sheet {}", config.workbook.matrix_sheet);
//! ```

mod error;
mod logging;
mod ranking;
mod workbook;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ranking::RankingSettings;
pub use workbook::WorkbookConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring pipeline settings (validation mode)
    #[serde(default)]
    pub ranking: RankingSettings,

    /// Workbook layout (sheet names, fixed dimensions)
    #[serde(default)]
    pub workbook: WorkbookConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IVPF_WISP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IVPF_WISP__RANKING__VALIDATION=permissive` -> `ranking.validation = permissive`
    /// - `IVPF_WISP__WORKBOOK__WEIGHTS_SHEET=Weights` -> `workbook.weights_sheet = "Weights"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IVPF_WISP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.workbook.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
