//! # Extension Message Bridge
//!
//! Request and response shapes exchanged between the browser extension's
//! page script, popup and background worker. [`handle_request`] answers a
//! request synchronously; the caller owns transport and per-tab storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use svp_core::ValidationResult;

use crate::dispatch::validate_schema;
use crate::html::{extract_json_ld, validate_detected, DetectedSchema, PageValidation};

/// A message keyed by its `action` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ExtensionRequest {
    ValidateSchema { schema: Value },
    ValidateAllSchemas {
        #[serde(default)]
        schemas: Vec<DetectedSchema>,
    },
    DetectSchemas { html: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionResponse {
    Result { result: ValidationResult },
    Results { results: Vec<PageValidation> },
    Schemas { schemas: Vec<DetectedSchema> },
}

pub fn handle_request(request: &ExtensionRequest) -> ExtensionResponse {
    match request {
        ExtensionRequest::ValidateSchema { schema } => ExtensionResponse::Result {
            result: validate_schema(schema),
        },
        ExtensionRequest::ValidateAllSchemas { schemas } => ExtensionResponse::Results {
            results: validate_detected(schemas),
        },
        ExtensionRequest::DetectSchemas { html } => ExtensionResponse::Schemas {
            schemas: extract_json_ld(html),
        },
    }
}
