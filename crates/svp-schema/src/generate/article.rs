use svp_core::url::normalize_url;

use crate::document::{Agent, ArticleDocument, ImageObject, Organization};
use crate::input::{present, ArticleInput, AuthorKind, PublisherInput};

use super::image_objects;

/// Generate an `Article` document.
///
/// `headline` and the author name are copied verbatim. The canonical `url`
/// doubles as `mainEntityOfPage`.
pub fn generate_article_schema(input: &ArticleInput) -> ArticleDocument {
    let mut author = match input.author_type {
        AuthorKind::Person => Agent::person(input.author_name.clone()),
        AuthorKind::Organization => Agent::organization(input.author_name.clone()),
    };
    author.url = present(&input.author_url).map(normalize_url);

    let mut doc = ArticleDocument::new(input.headline.clone(), author);

    doc.description = present(&input.description).map(str::to_string);
    doc.date_published = present(&input.date_published).map(str::to_string);
    doc.date_modified = present(&input.date_modified).map(str::to_string);
    doc.article_body = present(&input.article_body).map(str::to_string);

    if let Some(url) = present(&input.url) {
        let canonical = normalize_url(url);
        doc.main_entity_of_page = Some(canonical.clone());
        doc.url = Some(canonical);
    }

    doc.image = input.image.as_ref().and_then(image_objects);
    doc.publisher = input.publisher.as_ref().map(publisher_organization);

    tracing::debug!(
        headline = %doc.headline,
        has_image = doc.image.is_some(),
        has_publisher = doc.publisher.is_some(),
        "generated Article"
    );

    doc
}

fn publisher_organization(publisher: &PublisherInput) -> Organization {
    let mut org = Organization::new(publisher.name.clone());
    org.url = present(&publisher.url).map(normalize_url);
    org.logo = present(&publisher.logo).map(|logo| ImageObject::new(normalize_url(logo)));
    org
}
