//! TOML catalog files
//!
//! ```toml
//! [modality_weights]
//! text = 1.0
//! vision = 1.6
//! audio = 1.3
//!
//! [[models]]
//! id = "house-llm"
//! provider = "Acme"
//! family = "reasoning"
//! modalities = ["text"]
//! latency = 800
//! cost = 1.2
//! quality = 88
//! tagline = "Our fine-tuned model"
//! strengths = ["deterministic"]
//! ```

use paikeys_application::{CatalogSource, CatalogSourceError};
use paikeys_domain::{Catalog, ModalityWeights, ModelDescriptor};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// On-disk shape of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub modality_weights: ModalityWeights,
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> Result<Catalog, CatalogSourceError> {
        Ok(Catalog::new(self.models, self.modality_weights)?)
    }
}

/// Catalog source reading a TOML file
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, content: &str) -> Result<CatalogFile, CatalogSourceError> {
        toml::from_str(content).map_err(|e| CatalogSourceError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl CatalogSource for TomlCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogSourceError> {
        debug!("Reading catalog file {}", self.path.display());
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| CatalogSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let catalog = self.parse(&content)?.into_catalog()?;
        info!(
            "Loaded {} models from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
