//! # Type Dispatch
//!
//! Routes an arbitrary JSON-LD document to the validator for its `@type`.
//! Only `Article` and `Product` have validators; every other tag (known
//! Schema.org type or not) is reported as unsupported rather than passed.

use serde_json::Value;

use svp_core::{SchemaType, ValidationResult};

use crate::validate::{validate_article_schema, validate_product_schema};

/// Which validator a document is routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Article,
    Product,
    /// Rendered `@type` of a document with no validator, `"undefined"`
    /// when the tag is absent.
    Unsupported(String),
}

impl SchemaKind {
    /// Classify a document by its `@type`. Only an exact string tag
    /// selects a validator.
    pub fn of(schema: &Value) -> Self {
        let tag = schema.get("@type");
        match tag.and_then(Value::as_str) {
            Some(s) if s == SchemaType::Article.as_str() => Self::Article,
            Some(s) if s == SchemaType::Product.as_str() => Self::Product,
            Some(s) => Self::Unsupported(s.to_string()),
            None => Self::Unsupported(match tag {
                None | Some(Value::Null) => "undefined".to_string(),
                Some(other) => other.to_string(),
            }),
        }
    }
}

/// Validate any document, dispatching on `@type`.
pub fn validate_schema(schema: &Value) -> ValidationResult {
    match SchemaKind::of(schema) {
        SchemaKind::Article => validate_article_schema(schema),
        SchemaKind::Product => validate_product_schema(schema),
        SchemaKind::Unsupported(tag) => {
            tracing::debug!(%tag, "no validator for schema type");
            ValidationResult::single_error("@type", format!("Unsupported schema type: {tag}"))
        }
    }
}

/// Parse user-supplied JSON text, then validate it.
pub fn validate_json_text(text: &str) -> ValidationResult {
    match serde_json::from_str::<Value>(text) {
        Ok(schema) => validate_schema(&schema),
        Err(err) => {
            tracing::debug!(error = %err, "rejected unparseable schema text");
            ValidationResult::single_error("schema", "Invalid JSON format")
        }
    }
}
