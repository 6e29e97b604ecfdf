//! # HTML Integration
//!
//! Reading JSON-LD out of a rendered page and writing a document back into
//! one. Extraction mirrors what a browser sees: every
//! `<script type="application/ld+json">` element in document order, with
//! blocks that fail to parse skipped rather than failing the page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use svp_core::{SvpError, ValidationResult};

use crate::dispatch::validate_schema;
use crate::validate::base::is_truthy;

static JSON_LD_SCRIPT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#)
        .expect("JSON-LD script selector is valid")
});

const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// `<` inside the payload, escaped so it can never close the element.
const ESCAPED_LT: &str = concat!("\\", "u003c");

/// A JSON-LD block found on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSchema {
    /// Position among all JSON-LD script elements on the page, counting
    /// blocks that failed to parse.
    pub index: usize,
    /// The block's `@type`: a string tag as-is, any other present value
    /// (e.g. a multi-type array) as JSON text, or `"Unknown"` when absent
    /// or falsy.
    #[serde(rename = "type")]
    pub schema_type: String,
    pub data: Value,
}

/// Validation outcome for one detected block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageValidation {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub validation: ValidationResult,
}

/// Extract every parseable JSON-LD block from an HTML document.
pub fn extract_json_ld(html: &str) -> Vec<DetectedSchema> {
    let document = Html::parse_document(html);
    let mut found = Vec::new();

    for (index, script) in document.select(&JSON_LD_SCRIPT).enumerate() {
        let text: String = script.text().collect();
        match serde_json::from_str::<Value>(&text) {
            Ok(data) => {
                let schema_type = type_label(data.get("@type"));
                found.push(DetectedSchema {
                    index,
                    schema_type,
                    data,
                });
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unparseable JSON-LD block");
            }
        }
    }

    tracing::debug!(count = found.len(), "extracted JSON-LD blocks");
    found
}

fn type_label(tag: Option<&Value>) -> String {
    match tag.filter(|t| is_truthy(Some(*t))) {
        None => "Unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Validate each detected block through type dispatch.
pub fn validate_detected(schemas: &[DetectedSchema]) -> Vec<PageValidation> {
    schemas
        .iter()
        .map(|detected| PageValidation {
            schema_type: detected.schema_type.clone(),
            validation: validate_schema(&detected.data),
        })
        .collect()
}

/// Render a document as an HTML `<script>` block for a page head.
pub fn render_script_tag<T: Serialize + ?Sized>(document: &T) -> Result<String, SvpError> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(format!(
        "{SCRIPT_OPEN}\n{}\n{SCRIPT_CLOSE}",
        json.replace('<', ESCAPED_LT)
    ))
}
