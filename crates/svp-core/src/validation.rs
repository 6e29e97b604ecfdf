//! # Validation Results
//!
//! Value types returned by every validator. Issues are accumulated into
//! flat lists; nothing is thrown. A result is immutable once built.
//!
//! ## Invariant
//!
//! `ValidationResult::is_valid()` is exactly `errors().is_empty()`. The
//! flag is computed by the constructors and by deserialization, so a
//! result read back from JSON with a stale `valid` field is corrected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding against one field of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted/bracketed path to the field, e.g. `offers[1].price`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    pub severity: Severity,
    /// Optional JSON path for callers that track location separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(field, message, Severity::Error)
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(field, message, Severity::Warning)
    }

    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(field, message, Severity::Info)
    }

    fn with_severity(
        field: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity,
            path: None,
        }
    }

    /// Attach a location path.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResultRepr")]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    info: Vec<ValidationIssue>,
}

#[derive(Deserialize)]
struct ResultRepr {
    #[serde(default)]
    errors: Vec<ValidationIssue>,
    #[serde(default)]
    warnings: Vec<ValidationIssue>,
    #[serde(default)]
    info: Vec<ValidationIssue>,
}

impl From<ResultRepr> for ValidationResult {
    fn from(repr: ResultRepr) -> Self {
        Self::with_info(repr.errors, repr.warnings, repr.info)
    }
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationIssue>, warnings: Vec<ValidationIssue>) -> Self {
        Self::with_info(errors, warnings, Vec::new())
    }

    pub fn with_info(
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
        info: Vec<ValidationIssue>,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info,
        }
    }

    /// A result carrying exactly one error and nothing else.
    pub fn single_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationIssue::error(field, message)], Vec::new())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    pub fn info(&self) -> &[ValidationIssue] {
        &self.info
    }

    /// Consume the result, returning `(errors, warnings, info)`.
    pub fn into_parts(
        self,
    ) -> (
        Vec<ValidationIssue>,
        Vec<ValidationIssue>,
        Vec<ValidationIssue>,
    ) {
        (self.errors, self.warnings, self.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tracks_error_list() {
        let ok = ValidationResult::new(vec![], vec![ValidationIssue::warning("image", "w")]);
        assert!(ok.is_valid());
        assert_eq!(ok.warnings().len(), 1);

        let bad = ValidationResult::single_error("name", "name is required");
        assert!(!bad.is_valid());
        assert_eq!(bad.errors()[0].severity, Severity::Error);
    }

    #[test]
    fn serializes_without_empty_info() {
        let result = ValidationResult::new(vec![], vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "valid": true, "errors": [], "warnings": [] })
        );
    }

    #[test]
    fn deserialization_recomputes_valid_flag() {
        let json = serde_json::json!({
            "valid": true,
            "errors": [{ "field": "name", "message": "name is required", "severity": "error" }],
            "warnings": []
        });
        let result: ValidationResult = serde_json::from_value(json).unwrap();
        assert!(!result.is_valid());
    }

    #[test]
    fn issue_path_is_optional_on_the_wire() {
        let issue = ValidationIssue::error("offers[0].price", "offers[0].price is required");
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("path").is_none());
        assert_eq!(json["severity"], "error");

        let located = issue.at("$.offers[0].price");
        let json = serde_json::to_value(&located).unwrap();
        assert_eq!(json["path"], "$.offers[0].price");
    }

    #[test]
    fn issue_display_is_field_then_message() {
        let issue = ValidationIssue::info("headline", "headline is long");
        assert_eq!(issue.to_string(), "headline: headline is long");
        assert_eq!(issue.severity.to_string(), "info");
    }
}
