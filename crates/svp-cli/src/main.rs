//! # svp CLI entry point
//!
//! Parses command-line arguments, initializes logging and configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use svp_cli::config::CliConfig;
use svp_cli::generate::{run_generate, GenerateArgs};
use svp_cli::scan::{run_scan, ScanArgs};
use svp_cli::types::{run_types, TypesArgs};
use svp_cli::validate::{run_validate, ValidateArgs};

/// Schema Validator Pro
///
/// Generate Schema.org JSON-LD for articles and products, validate
/// structured data, and scan pages for embedded JSON-LD.
#[derive(Parser, Debug)]
#[command(name = "svp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML or JSON).
    #[arg(long, global = true, env = "SVP_CONFIG")]
    config: Option<PathBuf>,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a JSON-LD document from an input file.
    Generate(GenerateArgs),

    /// Validate a JSON-LD document from a file or stdin.
    Validate(ValidateArgs),

    /// Extract and validate every JSON-LD block in an HTML page.
    Scan(ScanArgs),

    /// List known Schema.org types.
    Types(TypesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "svp CLI starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?config, "resolved configuration");

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Scan(args) => run_scan(&args, &config),
        Commands::Types(args) => run_types(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` count picks the level.
/// Logs go to stderr so stdout carries only documents and reports.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
