//! # Error Types
//!
//! Generators and validators never fail: they report problems through
//! [`crate::ValidationResult`]. `SvpError` covers the fallible edges around
//! them: turning documents into text and parsing type tags. Reading files
//! and YAML belongs to the CLI, which reports those through `anyhow`.

use thiserror::Error;

/// Top-level error type for Schema Validator Pro.
#[derive(Error, Debug)]
pub enum SvpError {
    /// Input was readable but is not something the caller can act on.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// JSON parse or encode failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
