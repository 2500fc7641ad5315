//! Console output formatter for catalog listings and routing results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use paikeys_application::{CatalogListing, RouteResponse, RouteTaskError};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the catalog as an aligned table
    pub fn format_catalog(listing: &CatalogListing) -> String {
        if listing.models.is_empty() {
            return format!("{}\n", "The catalog is empty.".yellow());
        }

        let id_width = listing
            .models
            .iter()
            .map(|m| m.id.len())
            .max()
            .unwrap_or(0)
            .max(2);
        let provider_width = listing
            .models
            .iter()
            .map(|m| m.provider.len())
            .max()
            .unwrap_or(0)
            .max(8);

        let mut output = String::new();
        output.push_str(&Self::header(&format!("Model Catalog ({})", listing.models.len())));
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!(
                "{:<id_width$}  {:<provider_width$}  {:>8}  {:>5}  {:>7}  {:<20}  {}",
                "ID", "PROVIDER", "LATENCY", "COST", "QUALITY", "MODALITIES", "FAMILY"
            )
            .bold()
        ));

        for model in &listing.models {
            output.push_str(&format!(
                "{:<id_width$}  {:<provider_width$}  {:>6}ms  {:>5.2}  {:>7.0}  {:<20}  {}\n",
                model.id,
                model.provider,
                model.latency,
                model.cost,
                model.quality,
                model.modalities.joined(),
                model.family
            ));
            if !model.tagline.is_empty() {
                output.push_str(&format!(
                    "{:<id_width$}  {}\n",
                    "",
                    model.tagline.dimmed()
                ));
            }
        }

        output
    }

    /// Format a routing recommendation
    pub fn format_route(response: &RouteResponse) -> String {
        let best = &response.best;
        let mut output = String::new();

        output.push_str(&Self::header("Recommendation"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} {}\n",
            "Best match:".cyan().bold(),
            best.id.green().bold(),
            format!("({})", best.provider).dimmed()
        ));
        if !best.tagline.is_empty() {
            output.push_str(&format!("  {}\n", best.tagline));
        }
        output.push_str(&format!("  {} {}\n", "Latency:".bold(), best.latency));
        output.push_str(&format!("  {} {}\n", "Why:".bold(), best.reason));
        if !best.strengths.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "Strengths:".bold(),
                best.strengths.join(", ")
            ));
        }

        if !response.alternatives.is_empty() {
            output.push_str(&Self::section_header("Alternatives"));
            for (i, alt) in response.alternatives.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} {} - {}\n",
                    i + 1,
                    alt.id.yellow().bold(),
                    format!("({})", alt.provider).dimmed(),
                    alt.reason
                ));
            }
        }

        if !response.insights.is_empty() {
            output.push_str(&Self::section_header("Insights"));
            for insight in &response.insights {
                output.push_str(&format!("  * {}\n", insight));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Estimated tokens:".dimmed(),
            response.tokens.estimated
        ));

        output
    }

    /// Format a routing failure
    pub fn format_error(error: &RouteTaskError) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_catalog(&self, listing: &CatalogListing) -> String {
        Self::format_catalog(listing)
    }

    fn format_route(&self, response: &RouteResponse) -> String {
        Self::format_route(response)
    }

    fn format_error(&self, error: &RouteTaskError) -> String {
        Self::format_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paikeys_application::{AlternativeModel, BestModel};
    use paikeys_domain::TokenEstimate;

    fn response() -> RouteResponse {
        RouteResponse {
            best: BestModel {
                id: "atlas".to_string(),
                provider: "Acme".to_string(),
                tagline: "Deep reasoning".to_string(),
                latency: "1500ms median".to_string(),
                reason: "Ranked on quality: 95/100 quality rating".to_string(),
                strengths: vec!["reasoning".to_string()],
            },
            alternatives: vec![AlternativeModel {
                id: "blink".to_string(),
                provider: "Bolt".to_string(),
                reason: "Ranked on quality: 70/100 quality rating".to_string(),
            }],
            insights: vec!["blink responds 1250ms faster if latency becomes critical".to_string()],
            tokens: TokenEstimate { estimated: 131 },
        }
    }

    #[test]
    fn test_format_route_contains_every_section() {
        let output = ConsoleFormatter::format_route(&response());
        assert!(output.contains("atlas"));
        assert!(output.contains("1500ms median"));
        assert!(output.contains("Ranked on quality: 95/100 quality rating"));
        assert!(output.contains("blink"));
        assert!(output.contains("blink responds 1250ms faster if latency becomes critical"));
        assert!(output.contains("131"));
    }

    #[test]
    fn test_format_route_without_alternatives() {
        let mut response = response();
        response.alternatives.clear();
        response.insights.clear();
        let output = ConsoleFormatter::format_route(&response);
        assert!(!output.contains("Alternatives"));
        assert!(!output.contains("Insights"));
    }

    #[test]
    fn test_format_empty_catalog() {
        let output = ConsoleFormatter::format_catalog(&CatalogListing { models: Vec::new() });
        assert!(output.contains("The catalog is empty."));
    }

    #[test]
    fn test_format_error_uses_message() {
        let output = ConsoleFormatter::format_error(&RouteTaskError::InvalidPrompt);
        assert!(output.contains("A prompt description is required."));
    }
}
