//! # svp-cli — Schema Validator Pro command line
//!
//! Provides the `svp` binary over the `svp-schema` library.
//!
//! ## Subcommands
//!
//! - `svp generate article|product` — build JSON-LD from an input file.
//! - `svp validate` — validate a JSON-LD document from a file or stdin.
//! - `svp scan` — extract and validate every JSON-LD block in an HTML page.
//! - `svp types` — list known Schema.org types.
//!
//! ```bash
//! svp generate article --input post.yaml --script
//! curl -s https://example.com/product.json | svp validate
//! svp scan page.html --json
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` validation failure, `2` operational error (unreadable
//! input, bad configuration).

pub mod config;
pub mod generate;
pub mod report;
pub mod scan;
pub mod types;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Deserialize a JSON (`.json`) or YAML (anything else) file.
pub fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_source(Some(path))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&text).with_context(|| format!("invalid YAML in {}", path.display()))
    }
}

/// Write `text` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}
