//! Output formatter trait

use paikeys_application::{CatalogListing, RouteResponse, RouteTaskError};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Format the model catalog
    fn format_catalog(&self, listing: &CatalogListing) -> String;

    /// Format a routing recommendation
    fn format_route(&self, response: &RouteResponse) -> String;

    /// Format a routing failure
    fn format_error(&self, error: &RouteTaskError) -> String;
}
