//! # Generator Input Records
//!
//! Flat, mostly-optional records supplied by a form, a CLI input file, or
//! an API caller. Keys deserialize in camelCase so the same JSON/YAML a web
//! form posts can be fed to the generators unchanged.
//!
//! Empty strings are treated exactly like absent fields.

use serde::{Deserialize, Serialize};

use crate::document::OneOrMany;

/// Which agent type the article author is emitted as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorKind {
    #[default]
    Person,
    Organization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub author_type: AuthorKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    /// A single URL or a list of URLs.
    #[serde(default)]
    pub image: Option<OneOrMany<String>>,
    #[serde(default)]
    pub article_body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub publisher: Option<PublisherInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<OneOrMany<String>>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_currency: Option<String>,
    /// A `https://schema.org/...` URI. Any other value is replaced with
    /// `InStock` by the generator.
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub mpn: Option<String>,
    #[serde(default)]
    pub gtin: Option<String>,
    #[serde(default)]
    pub rating_value: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
}

/// `Some` only for a non-empty string.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
