//! # Validators
//!
//! Type-specific validators built on the [`base`] toolkit. Each one is a
//! single pass over a fixed checklist that accumulates issues; nothing is
//! retried and no state is carried between calls.

pub mod base;

mod article;
mod product;

pub use article::validate_article_schema;
pub use product::validate_product_schema;

use serde_json::Value;

use svp_core::{SchemaType, ValidationIssue, ValidationResult};

use self::base::{is_record, is_truthy, validate_base, validate_url};

/// Issues gathered so far by a type-specific validator.
struct Checklist {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Checklist {
    /// Run the base checks first so their issues lead both lists.
    fn start(schema: &Value) -> Self {
        let (errors, warnings, _) = validate_base(schema).into_parts();
        Self { errors, warnings }
    }

    fn expect_type(&mut self, record: &Value, expected: SchemaType) {
        if record.get("@type").and_then(Value::as_str) != Some(expected.as_str()) {
            self.errors.push(ValidationIssue::error(
                "@type",
                format!("@type must be \"{expected}\""),
            ));
        }
    }

    /// Validate `image[i].url` for every record entry of a single-object or
    /// array `image` property. Scalar entries are ignored.
    fn check_images(&mut self, image: Option<&Value>) {
        if !is_truthy(image) {
            return;
        }
        for (index, entry) in entries(image).enumerate() {
            if is_record(entry) {
                validate_url(entry.get("url"), &format!("image[{index}].url"), &mut self.errors);
            }
        }
    }

    fn finish(self, kind: SchemaType) -> ValidationResult {
        tracing::debug!(
            schema_type = %kind,
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            "validated document"
        );
        ValidationResult::new(self.errors, self.warnings)
    }
}

/// Iterate a property that may hold one value or an array of values.
fn entries(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    let items: Vec<&Value> = match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    };
    items.into_iter()
}
