//! # JSON-LD Document Model
//!
//! Typed output of the generators. Each struct serializes to exactly the
//! JSON-LD shape search engines consume: `@context`/`@type` keys, camelCase
//! property names, and optional properties omitted rather than `null`.
//!
//! Validators do not use these types. They accept any `serde_json::Value`
//! so that hand-written and scraped documents can be checked too; call
//! [`JsonLd::to_value`] to validate a generated document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use svp_core::{SchemaType, SvpError, SCHEMA_CONTEXT};

/// Common behavior of every generated top-level document.
pub trait JsonLd: Serialize {
    fn schema_type(&self) -> SchemaType;

    fn to_value(&self) -> Result<Value, SvpError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Two-space indented JSON text, as shown to users and written to files.
    fn to_json_pretty(&self) -> Result<String, SvpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A property that holds a bare value when there is exactly one, and an
/// array otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapse a list: one element becomes `One`, anything else (including
    /// an empty list) stays `Many`.
    pub fn collapse(mut items: Vec<T>) -> Self {
        if items.len() == 1 {
            if let Some(only) = items.pop() {
                return Self::One(only);
            }
        }
        Self::Many(items)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::ImageObject,
            url: url.into(),
        }
    }
}

/// A `Person` or `Organization` acting as an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Agent {
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::Person,
            name: name.into(),
            url: None,
        }
    }

    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::Organization,
            name: name.into(),
            url: None,
        }
    }
}

/// Publisher or brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: SchemaType::Organization,
            name: name.into(),
            url: None,
            logo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub price: String,
    pub price_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub rating_value: f64,
    pub review_count: u64,
    pub best_rating: u32,
    pub worst_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub headline: String,
    pub author: Agent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<OneOrMany<ImageObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
}

impl ArticleDocument {
    /// A document with only the always-present properties set.
    pub fn new(headline: impl Into<String>, author: Agent) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: SchemaType::Article,
            headline: headline.into(),
            author,
            description: None,
            date_published: None,
            date_modified: None,
            article_body: None,
            url: None,
            main_entity_of_page: None,
            image: None,
            publisher: None,
        }
    }
}

impl JsonLd for ArticleDocument {
    fn schema_type(&self) -> SchemaType {
        SchemaType::Article
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: SchemaType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<OneOrMany<ImageObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<OneOrMany<Offer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
}

impl ProductDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: SchemaType::Product,
            name: name.into(),
            description: None,
            image: None,
            brand: None,
            sku: None,
            mpn: None,
            gtin: None,
            offers: None,
            aggregate_rating: None,
        }
    }
}

impl JsonLd for ProductDocument {
    fn schema_type(&self) -> SchemaType {
        SchemaType::Product
    }
}
