//! Presentation-level configuration
//!
//! Resolved output settings: CLI flags take precedence over the config file.

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::output::json::JsonFormatter;
use paikeys_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags over file settings
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        no_color: bool,
        file_format: Option<OutputFormat>,
        file_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }

    /// Apply the color setting process-wide
    pub fn apply_color(&self) {
        if !self.color || self.format == OutputFormat::Json {
            colored::control::set_override(false);
        }
    }

    /// Formatter for the configured format
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(ConsoleFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
