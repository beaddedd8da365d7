//! fxlint CLI tool.
//!
//! Usage:
//! ```bash
//! fxlint check [OPTIONS] [PATH]
//! fxlint list-rules
//! fxlint init
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Convention linter for fx-based Go projects
#[derive(Parser)]
#[command(name = "fxlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run convention checks
    Check(CheckArgs),

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Arguments to the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Path to analyze (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only run specific rules (comma-separated names or codes)
    #[arg(long)]
    pub rules: Option<String>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Globs naming files where module declarations are allowed
    #[arg(long, value_delimiter = ',')]
    pub module_paths: Vec<String>,

    /// Require module names to match their package
    #[arg(long, value_name = "BOOL")]
    pub strict_naming: Option<bool>,

    /// Globs naming locations where mock types are allowed
    #[arg(long, value_delimiter = ',')]
    pub mock_paths: Vec<String>,

    /// Check placement of mock-prefixed types
    #[arg(long, value_name = "BOOL")]
    pub strict_mock_naming: Option<bool>,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check(args) => {
            let source = config_resolver::resolve(&args.path, cli.config.as_deref());
            commands::check::run(&args, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
