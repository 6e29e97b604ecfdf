//! # Generators
//!
//! Assemble JSON-LD documents from simplified input records. Generators
//! copy required fields verbatim without checking them, include optional
//! properties only when the input value is non-empty, and normalize every
//! URL they emit.

mod article;
mod product;

pub use article::generate_article_schema;
pub use product::generate_product_schema;

use svp_core::url::normalize_url;

use crate::document::{ImageObject, OneOrMany};

/// Map image URLs to `ImageObject`s, collapsing a single result to a bare
/// object. Returns `None` when the input is a lone empty string.
fn image_objects(images: &OneOrMany<String>) -> Option<OneOrMany<ImageObject>> {
    if let OneOrMany::One(url) = images {
        if url.is_empty() {
            return None;
        }
    }
    let objects = images
        .iter()
        .map(|url| ImageObject::new(normalize_url(url)))
        .collect();
    Some(OneOrMany::collapse(objects))
}
