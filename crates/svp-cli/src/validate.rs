//! # Validate Subcommand
//!
//! Validates one JSON-LD document read from a file or stdin, dispatching
//! on its `@type`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use svp_core::ValidationResult;
use svp_schema::validate_json_text;

use crate::config::CliConfig;
use crate::report::{exit_code, render_report};

/// Arguments for the `svp validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON-LD document to validate. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Print the raw result as JSON instead of a report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when valid, 1 when invalid (or when warnings are
/// present and `strict_warnings` is configured).
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let text = crate::read_source(args.path.as_deref())?;
    let result = validate_json_text(&text);

    tracing::info!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "validated document"
    );

    print!("{}", format_result(&result, args.json, config.pretty)?);
    Ok(exit_code(&result, config.strict_warnings))
}

pub fn format_result(result: &ValidationResult, json: bool, pretty: bool) -> Result<String> {
    if !json {
        return Ok(render_report(result));
    }
    let text = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(format!("{text}\n"))
}
