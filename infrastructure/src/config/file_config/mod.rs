//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod output;

pub use catalog::FileCatalogConfig;
pub use output::FileOutputConfig;

use paikeys_domain::ScoringWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found while validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("scoring: {0}")]
    InvalidScoring(String),

    #[error("catalog.path cannot be empty")]
    EmptyCatalogPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog source
    pub catalog: FileCatalogConfig,
    /// Composite score weights (uses domain type)
    pub scoring: ScoringWeights,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues: Vec<ConfigValidationError> = self
            .scoring
            .validate()
            .into_iter()
            .map(ConfigValidationError::InvalidScoring)
            .collect();

        if self
            .catalog
            .path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            issues.push(ConfigValidationError::EmptyCatalogPath);
        }

        issues
    }
}
