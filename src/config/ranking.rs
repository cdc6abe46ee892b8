//! Ranking configuration

use serde::Deserialize;

use crate::domain::analysis::ValidationMode;

/// Settings for the scoring pipeline
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct RankingSettings {
    /// Whether judgments are validated before scoring (`strict` or `permissive`)
    #[serde(default)]
    pub validation: ValidationMode,
}

impl RankingSettings {
    /// Settings with the given validation mode
    pub fn with_validation(validation: ValidationMode) -> Self {
        Self { validation }
    }
}
