//! Port definitions (interfaces implemented by the infrastructure layer).

pub mod catalog_source;
