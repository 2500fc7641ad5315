//! Configuration file loading for paikeys
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PAIKEYS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./paikeys.toml` or `./.paikeys.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/paikeys/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
