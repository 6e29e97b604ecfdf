//! # Base Validation Toolkit
//!
//! Field-level checks composed by every type-specific validator. Each
//! check appends to a caller-owned issue list and never short-circuits.
//!
//! ## Presence Semantics
//!
//! A value counts as *present* when it is truthy in the JSON-LD sense
//! used throughout: `null`, `false`, `0`, and `""` are absent; any array
//! or object (even empty) is present. Format checks (`validate_url`,
//! `validate_date`, `validate_number`) are no-ops on absent values, so a
//! legitimate `0` rating or count is skipped rather than range-checked.
//!
//! ## Records
//!
//! Wherever a nested object is expected, an array is also accepted as a
//! record with no named properties (see [`is_record`]): its fields then
//! read as absent, so `"author": [{...}]` reports `author.name is required`
//! rather than a shape error.

use serde_json::Value;

use svp_core::date::is_valid_date;
use svp_core::url::is_valid_url;
use svp_core::{ValidationIssue, ValidationResult, SCHEMA_CONTEXT};

/// Whether `value` is present and truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Whether `value` can be read as a record: any object, or an array
/// (which has no named properties). `null` and scalars are not records.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn is_blank(value: Option<&Value>) -> bool {
    !is_truthy(value) || value.and_then(Value::as_str).is_some_and(|s| s.trim().is_empty())
}

/// Check that `schema` is a record with `@context` and `@type`.
///
/// A missing `@context` and a `@context` other than `https://schema.org`
/// are reported as two distinct errors. `@type` only has to be present.
pub fn validate_base(schema: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_record(schema) {
        errors.push(ValidationIssue::error("schema", "Schema must be an object"));
        return ValidationResult::new(errors, Vec::new());
    }

    let context = schema.get("@context");
    if !is_truthy(context) {
        errors.push(ValidationIssue::error("@context", "@context is required"));
    } else if context.and_then(Value::as_str) != Some(SCHEMA_CONTEXT) {
        errors.push(ValidationIssue::error(
            "@context",
            format!("@context must be \"{SCHEMA_CONTEXT}\""),
        ));
    }

    if !is_truthy(schema.get("@type")) {
        errors.push(ValidationIssue::error("@type", "@type is required"));
    }

    ValidationResult::new(errors, Vec::new())
}

/// Error unless `value` is present and, for strings, not blank.
pub fn validate_required(value: Option<&Value>, field: &str, errors: &mut Vec<ValidationIssue>) {
    if is_blank(value) {
        errors.push(ValidationIssue::error(field, format!("{field} is required")));
    }
}

/// Same test as [`validate_required`], reported as a warning.
pub fn validate_recommended(
    value: Option<&Value>,
    field: &str,
    warnings: &mut Vec<ValidationIssue>,
    message: Option<&str>,
) {
    if is_blank(value) {
        let message = message
            .map(str::to_string)
            .unwrap_or_else(|| format!("{field} is recommended for better SEO"));
        warnings.push(ValidationIssue::warning(field, message));
    }
}

/// Error if present but not a string or not an absolute URL.
pub fn validate_url(value: Option<&Value>, field: &str, errors: &mut Vec<ValidationIssue>) {
    if !is_truthy(value) {
        return;
    }
    match value.and_then(Value::as_str) {
        None => errors.push(ValidationIssue::error(field, format!("{field} must be a string"))),
        Some(s) if !is_valid_url(s) => {
            errors.push(ValidationIssue::error(field, format!("{field} must be a valid URL")))
        }
        Some(_) => {}
    }
}

/// Error if present but not a string or not a parseable date.
pub fn validate_date(value: Option<&Value>, field: &str, errors: &mut Vec<ValidationIssue>) {
    if !is_truthy(value) {
        return;
    }
    match value.and_then(Value::as_str) {
        None => errors.push(ValidationIssue::error(field, format!("{field} must be a string"))),
        Some(s) if !is_valid_date(s) => {
            errors.push(ValidationIssue::error(field, format!("{field} must be a valid date")))
        }
        Some(_) => {}
    }
}

/// Error if present but not a number, or outside `[min, max]` when bounds
/// are given. Both bound violations are reported independently.
pub fn validate_number(
    value: Option<&Value>,
    field: &str,
    errors: &mut Vec<ValidationIssue>,
    min: Option<f64>,
    max: Option<f64>,
) {
    if !is_truthy(value) {
        return;
    }
    let Some(n) = value.and_then(Value::as_f64) else {
        errors.push(ValidationIssue::error(field, format!("{field} must be a number")));
        return;
    };

    if let Some(min) = min {
        if n < min {
            errors.push(ValidationIssue::error(field, format!("{field} must be at least {min}")));
        }
    }
    if let Some(max) = max {
        if n > max {
            errors.push(ValidationIssue::error(field, format!("{field} must be at most {max}")));
        }
    }
}
