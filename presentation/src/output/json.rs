//! JSON output, in the same shapes the HTTP API returns

use crate::output::formatter::OutputFormatter;
use paikeys_application::{CatalogListing, RouteResponse, RouteTaskError};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_catalog(&self, listing: &CatalogListing) -> String {
        Self::to_json(listing)
    }

    fn format_route(&self, response: &RouteResponse) -> String {
        Self::to_json(response)
    }

    fn format_error(&self, error: &RouteTaskError) -> String {
        Self::to_json(&error.to_body())
    }
}
