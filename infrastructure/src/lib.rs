//! Infrastructure layer for paikeys
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{BuiltinCatalogSource, CatalogFile, TomlCatalogSource, builtin_models};
pub use config::{ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig};
