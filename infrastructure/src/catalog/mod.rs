//! Catalog sources
//!
//! Adapters implementing [`CatalogSource`](paikeys_application::CatalogSource):
//! the built-in catalog shipped with the binary and user-supplied TOML files.

mod builtin;
mod toml_source;

pub use builtin::{BuiltinCatalogSource, builtin_models};
pub use toml_source::{CatalogFile, TomlCatalogSource};
