//! Catalog source port
//!
//! Defines where the model catalog comes from. The catalog is loaded once
//! at startup and then shared read-only with every use case.

use paikeys_domain::{Catalog, CatalogError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// A place a [`Catalog`] can be loaded from.
///
/// Implementations live in the infrastructure layer (built-in data,
/// TOML files, ...).
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    fn load(&self) -> Result<Catalog, CatalogSourceError>;

    /// Short human-readable description of the source, for logs
    fn describe(&self) -> String;
}
