//! Application layer for paikeys
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::catalog_source::{CatalogSource, CatalogSourceError};
pub use use_cases::list_catalog::{CatalogEntry, CatalogListing, ListCatalogUseCase};
pub use use_cases::route_task::{
    AlternativeModel, BestModel, ErrorBody, RouteRequest, RouteResponse, RouteTaskError,
    RouteTaskUseCase,
};
