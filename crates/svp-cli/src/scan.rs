//! # Scan Subcommand
//!
//! Extracts every `<script type="application/ld+json">` block from an HTML
//! file and validates each one. Blocks that are not valid JSON are skipped
//! with a warning, matching what a browser-side scan reports.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use svp_schema::{extract_json_ld, validate_detected, DetectedSchema, PageValidation};

use crate::config::CliConfig;
use crate::report::{exit_code, render_report};

/// Arguments for the `svp scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// HTML page to scan. Reads stdin when `-`.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Print results as JSON instead of a report.
    #[arg(long)]
    pub json: bool,
}

/// One scanned block, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ScanEntry {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: PageValidation,
}

/// Execute the scan subcommand.
///
/// Returns exit code: 0 when every block is valid (including a page with no
/// blocks), 1 when any block fails.
pub fn run_scan(args: &ScanArgs, config: &CliConfig) -> Result<u8> {
    let html = crate::read_source(Some(&args.path))?;
    let entries = scan_html(&html);

    tracing::info!(
        path = %args.path.display(),
        blocks = entries.len(),
        "scanned page"
    );

    if args.json {
        let text = if config.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        println!("{text}");
    } else {
        print!("{}", render_scan(&entries));
    }

    let code = entries
        .iter()
        .map(|entry| exit_code(&entry.outcome.validation, config.strict_warnings))
        .max()
        .unwrap_or(0);
    Ok(code)
}

/// Extract and validate, keeping each block's page index.
pub fn scan_html(html: &str) -> Vec<ScanEntry> {
    let detected: Vec<DetectedSchema> = extract_json_ld(html);
    let outcomes = validate_detected(&detected);
    detected
        .iter()
        .zip(outcomes)
        .map(|(found, outcome)| ScanEntry {
            index: found.index,
            outcome,
        })
        .collect()
}

pub fn render_scan(entries: &[ScanEntry]) -> String {
    if entries.is_empty() {
        return "No JSON-LD blocks found\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("[{}] {}: ", entry.index, entry.outcome.schema_type));
        out.push_str(&render_report(&entry.outcome.validation));
    }
    out
}
