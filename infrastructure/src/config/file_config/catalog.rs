//! Catalog configuration from TOML (`[catalog]` section)
//!
//! ```toml
//! [catalog]
//! path = "models.toml"
//! ```
//!
//! Without a path the built-in catalog is used.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// TOML catalog file replacing the built-in catalog
    pub path: Option<PathBuf>,
}
