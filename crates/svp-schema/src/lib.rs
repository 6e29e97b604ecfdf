//! # svp-schema — JSON-LD Generation & Validation
//!
//! The core of Schema Validator Pro: pure functions that map simplified
//! input records to Schema.org JSON-LD documents, and back-check arbitrary
//! JSON-LD documents against per-type rules.
//!
//! ## Generators (`generate`)
//!
//! - [`generate_article_schema`] — [`ArticleInput`] → [`ArticleDocument`].
//! - [`generate_product_schema`] — [`ProductInput`] → [`ProductDocument`].
//!
//! Generators never fail. Missing input is copied through as-is and left
//! for the validators to report. Malformed URLs degrade to best-effort
//! normalization.
//!
//! ## Validators (`validate`)
//!
//! - [`validate_article_schema`] and [`validate_product_schema`] compose the
//!   base toolkit in [`validate::base`] over a `serde_json::Value`.
//! - [`validate_schema`] dispatches on `@type`; anything other than
//!   `Article`/`Product` yields a single "unsupported" error.
//!
//! Issue order is deterministic: base checks, type tag, required fields,
//! recommended fields, then nested and optional fields in declaration order.
//!
//! ## Page Integration (`html`, `bridge`)
//!
//! Extraction of `<script type="application/ld+json">` blocks from HTML,
//! rendering a document back into such a block, and the request/response
//! shapes used by the browser extension message bridge.
//!
//! ## Invariant
//!
//! A document produced by a generator for type T passes validation for T
//! with zero errors, given an input whose required fields are non-blank and
//! whose URL/date fields are well-formed.
//!
//! ## Crate Policy
//!
//! - Depends only on `svp-core` internally.
//! - No I/O, no shared mutable state. Every function is safe to call from
//!   any number of threads concurrently.

pub mod bridge;
pub mod dispatch;
pub mod document;
pub mod generate;
pub mod html;
pub mod input;
pub mod validate;

pub use bridge::{handle_request, ExtensionRequest, ExtensionResponse};
pub use dispatch::{validate_json_text, validate_schema, SchemaKind};
pub use document::{
    Agent, AggregateRating, ArticleDocument, ImageObject, JsonLd, Offer, OneOrMany,
    Organization, ProductDocument,
};
pub use generate::{generate_article_schema, generate_product_schema};
pub use html::{extract_json_ld, render_script_tag, validate_detected, DetectedSchema, PageValidation};
pub use input::{AuthorKind, ArticleInput, ProductInput, PublisherInput};
pub use validate::{validate_article_schema, validate_product_schema};
