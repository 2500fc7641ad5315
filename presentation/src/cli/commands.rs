//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON, same shape as the HTTP API
    Json,
}

impl From<OutputFormat> for paikeys_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => paikeys_domain::OutputFormat::Text,
            OutputFormat::Json => paikeys_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for paikeys
#[derive(Parser, Debug)]
#[command(name = "paikeys")]
#[command(author, version, about = "Pai Keys - route a task to the best-fitting model")]
#[command(long_about = r#"
Pai Keys scores every model in its catalog against a task description and
recommends the best fit, with up to two fallbacks and a few insights.

Each request carries:
  priority    speed | cost | quality  (default: quality)
  tone        balanced | creative | deterministic  (default: balanced)
  modalities  text | vision | audio, repeatable  (default: text)
Unknown values fall back to the defaults.

Configuration files are loaded from (in priority order):
1. PAIKEYS_* environment variables, e.g. PAIKEYS_SCORING__TONE_BONUS=0.1
2. --config <path>     Explicit config file
3. ./paikeys.toml      Project-level config
4. ~/.config/paikeys/config.toml   Global config

Example:
  paikeys models
  paikeys route "Summarize this contract" --priority cost
  paikeys -o json route "Caption product photos" -m vision --tone creative
  echo '{"prompt":"Transcribe","modalities":["audio"]}' | paikeys route --request -
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the model catalog
    Models,
    /// Recommend a model for a task
    Route(RouteArgs),
}

/// Arguments of `paikeys route`
#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Task description (read from stdin when omitted)
    pub prompt: Option<String>,

    /// What to optimize for: speed, cost or quality
    #[arg(short, long, value_name = "PRIORITY")]
    pub priority: Option<String>,

    /// Desired tone: balanced, creative or deterministic
    #[arg(short, long, value_name = "TONE")]
    pub tone: Option<String>,

    /// Required input modality (can be specified multiple times)
    #[arg(short = 'm', long = "modality", value_name = "MODALITY")]
    pub modalities: Vec<String>,

    /// Read a JSON request body from a file ("-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["prompt", "priority", "tone", "modalities"])]
    pub request: Option<PathBuf>,
}
