//! CLI entrypoint for Pai Keys
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use paikeys_application::{
    CatalogSource, ListCatalogUseCase, RouteRequest, RouteTaskError, RouteTaskUseCase,
};
use paikeys_domain::Catalog;
use paikeys_infrastructure::{BuiltinCatalogSource, ConfigLoader, FileConfig, TomlCatalogSource};
use paikeys_presentation::{Cli, Command, OutputConfig, OutputFormatter, RouteArgs};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit code for requests rejected as invalid
const EXIT_INVALID_REQUEST: u8 = 2;
/// Exit code when no model can serve the request
const EXIT_UNAVAILABLE: u8 = 3;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Pai Keys");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config: {}", issue);
        }
        bail!("Invalid configuration ({} issues)", issues.len());
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        cli.no_color,
        config.output.format,
        config.output.color,
    );
    output.apply_color();
    let formatter = output.formatter();

    let Some(command) = cli.command else {
        bail!("No command given. Try `paikeys route \"<task>\"` or `paikeys --help`.");
    };

    // === Dependency Injection ===
    let catalog = Arc::new(load_catalog(&config)?);

    match command {
        Command::Models => {
            let listing = ListCatalogUseCase::new(catalog).execute();
            println!("{}", formatter.format_catalog(&listing));
            Ok(ExitCode::SUCCESS)
        }
        Command::Route(args) => {
            let request = build_request(args)?;
            let use_case = RouteTaskUseCase::new(catalog).with_weights(config.scoring);
            match use_case.execute(&request) {
                Ok(response) => {
                    println!("{}", formatter.format_route(&response));
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) => Ok(report_route_error(formatter.as_ref(), &error)),
            }
        }
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_catalog(config: &FileConfig) -> Result<Catalog> {
    let source: Box<dyn CatalogSource> = match &config.catalog.path {
        Some(path) => Box::new(TomlCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    };

    let catalog = source
        .load()
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    if catalog.is_empty() {
        warn!("{} contains no models; every route will be unavailable", source.describe());
    }
    info!("Catalog ready: {} models from {}", catalog.len(), source.describe());
    Ok(catalog)
}

fn build_request(args: RouteArgs) -> Result<RouteRequest> {
    if let Some(path) = args.request {
        let body = read_input(Some(&path))?;
        // Unparsable bodies behave like an empty request
        let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
        return Ok(RouteRequest::from_json_value(&value));
    }

    let prompt = match args.prompt {
        Some(prompt) => Some(prompt),
        None if !std::io::stdin().is_terminal() => Some(read_input(None)?),
        None => None,
    };

    Ok(RouteRequest {
        prompt,
        priority: args.priority,
        tone: args.tone,
        modalities: (!args.modalities.is_empty()).then_some(args.modalities),
    })
}

/// Read a file, or stdin for `None` and `-`
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn report_route_error(formatter: &dyn OutputFormatter, error: &RouteTaskError) -> ExitCode {
    eprintln!("{}", formatter.format_error(error));
    if error.is_client_error() {
        ExitCode::from(EXIT_INVALID_REQUEST)
    } else {
        ExitCode::from(EXIT_UNAVAILABLE)
    }
}
