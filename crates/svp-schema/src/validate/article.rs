use serde_json::Value;

use svp_core::{SchemaType, ValidationIssue, ValidationResult};

use super::base::{
    is_record, is_truthy, validate_date, validate_recommended, validate_required, validate_url,
};
use super::Checklist;

/// Validate an `Article` document.
///
/// Requires `headline` and an `author` object with a `name`. Warns when
/// `datePublished`, `image` or `description` are missing. Checks date and
/// URL formats of whichever optional properties are present, including
/// the nested `publisher` and every `image` entry.
pub fn validate_article_schema(schema: &Value) -> ValidationResult {
    let mut check = Checklist::start(schema);

    if !is_record(schema) {
        return check.finish(SchemaType::Article);
    }
    let article = schema;

    check.expect_type(article, SchemaType::Article);

    validate_required(article.get("headline"), "headline", &mut check.errors);
    validate_required(article.get("author"), "author", &mut check.errors);

    let author = article.get("author");
    if is_truthy(author) {
        match author.filter(|a| is_record(a)) {
            None => check
                .errors
                .push(ValidationIssue::error("author", "author must be an object")),
            Some(author) => {
                validate_required(author.get("name"), "author.name", &mut check.errors);
                validate_url(author.get("url"), "author.url", &mut check.errors);
            }
        }
    }

    validate_recommended(
        article.get("datePublished"),
        "datePublished",
        &mut check.warnings,
        Some("datePublished is recommended for better SEO and rich results"),
    );
    validate_recommended(
        article.get("image"),
        "image",
        &mut check.warnings,
        Some("image is recommended for rich results in search engines"),
    );
    validate_recommended(
        article.get("description"),
        "description",
        &mut check.warnings,
        Some("description is recommended for better SEO"),
    );

    validate_date(article.get("datePublished"), "datePublished", &mut check.errors);
    validate_date(article.get("dateModified"), "dateModified", &mut check.errors);
    validate_url(article.get("url"), "url", &mut check.errors);
    validate_url(
        article.get("mainEntityOfPage"),
        "mainEntityOfPage",
        &mut check.errors,
    );

    let publisher = article.get("publisher");
    if is_truthy(publisher) {
        match publisher.filter(|p| is_record(p)) {
            None => check
                .errors
                .push(ValidationIssue::error("publisher", "publisher must be an object")),
            Some(publisher) => {
                validate_required(publisher.get("name"), "publisher.name", &mut check.errors);
                validate_url(publisher.get("url"), "publisher.url", &mut check.errors);
                // A non-object logo (e.g. a bare URL string) is accepted as-is.
                if let Some(logo) = publisher.get("logo").filter(|l| is_record(l)) {
                    validate_url(logo.get("url"), "publisher.logo.url", &mut check.errors);
                }
            }
        }
    }

    check.check_images(article.get("image"));

    check.finish(SchemaType::Article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use svp_core::Severity;

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    fn complete() -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "Rust in Production",
            "author": {"@type": "Person", "name": "Ada", "url": "https://ada.example/"},
            "datePublished": "2024-01-15",
            "dateModified": "2024-02-01T09:00:00Z",
            "description": "How we shipped it.",
            "url": "https://blog.example/rust",
            "mainEntityOfPage": "https://blog.example/rust",
            "image": {"@type": "ImageObject", "url": "https://blog.example/cover.png"},
            "publisher": {
                "@type": "Organization",
                "name": "Example Blog",
                "url": "https://blog.example/",
                "logo": {"@type": "ImageObject", "url": "https://blog.example/logo.png"}
            }
        })
    }

    #[test]
    fn complete_article_is_clean() {
        let result = validate_article_schema(&complete());
        assert!(result.is_valid(), "{:?}", result.errors());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn non_object_short_circuits() {
        let result = validate_article_schema(&json!("Article"));
        assert!(!result.is_valid());
        assert_eq!(fields(result.errors()), vec!["schema"]);
    }

    #[test]
    fn wrong_type_tag() {
        let mut doc = complete();
        doc["@type"] = json!("BlogPosting");
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["@type"]);
        assert_eq!(result.errors()[0].message, "@type must be \"Article\"");
    }

    #[test]
    fn missing_type_reports_base_and_tag_errors() {
        let mut doc = complete();
        doc.as_object_mut().unwrap().remove("@type");
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["@type", "@type"]);
        assert_eq!(result.errors()[0].message, "@type is required");
    }

    #[test]
    fn required_fields_in_order() {
        let result = validate_article_schema(&json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "  "
        }));
        assert_eq!(fields(result.errors()), vec!["headline", "author"]);
        assert_eq!(
            fields(result.warnings()),
            vec!["datePublished", "image", "description"]
        );
        assert!(result.warnings().iter().all(|w| w.severity == Severity::Warning));
    }

    #[test]
    fn author_must_be_object_with_name() {
        let mut doc = complete();
        doc["author"] = json!("Ada");
        let result = validate_article_schema(&doc);
        assert_eq!(result.errors()[0].message, "author must be an object");

        doc["author"] = json!({"@type": "Person", "url": "not a url"});
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["author.name", "author.url"]);
    }

    #[test]
    fn array_author_reads_as_record_without_name() {
        let mut doc = complete();
        doc["author"] = json!([{"@type": "Person", "name": "Ada"}]);
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["author.name"]);
        assert_eq!(result.errors()[0].message, "author.name is required");

        doc["author"] = json!({"name": "Ada"});
        doc["publisher"] = json!([{"name": "Example Blog"}]);
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["publisher.name"]);
    }

    #[test]
    fn array_document_reports_base_and_required_fields() {
        let result = validate_article_schema(&json!([complete()]));
        assert_eq!(
            fields(result.errors()),
            vec!["@context", "@type", "@type", "headline", "author"]
        );
    }

    #[test]
    fn reduced_precision_dates_are_accepted() {
        let mut doc = complete();
        for date in ["2024", "2024-01", "2024-01-15T10:30Z", "2024-01-15T10:30+02:00"] {
            doc["datePublished"] = json!(date);
            doc["dateModified"] = json!(date);
            let result = validate_article_schema(&doc);
            assert!(result.is_valid(), "{date}: {:?}", result.errors());
        }
    }

    #[test]
    fn bad_dates_and_urls() {
        let mut doc = complete();
        doc["datePublished"] = json!("soon");
        doc["dateModified"] = json!(5);
        doc["url"] = json!("blog.example/rust");
        doc["mainEntityOfPage"] = json!({"@type": "WebPage"});
        let result = validate_article_schema(&doc);
        assert_eq!(
            fields(result.errors()),
            vec!["datePublished", "dateModified", "url", "mainEntityOfPage"]
        );
        assert_eq!(result.errors()[3].message, "mainEntityOfPage must be a string");
    }

    #[test]
    fn publisher_checks() {
        let mut doc = complete();
        doc["publisher"] = json!("Example Blog");
        assert_eq!(
            validate_article_schema(&doc).errors()[0].message,
            "publisher must be an object"
        );

        doc["publisher"] = json!({"url": "bad", "logo": {"url": "also bad"}});
        let result = validate_article_schema(&doc);
        assert_eq!(
            fields(result.errors()),
            vec!["publisher.name", "publisher.url", "publisher.logo.url"]
        );

        doc["publisher"] = json!({"name": "Example", "logo": "not checked"});
        assert!(validate_article_schema(&doc).is_valid());
    }

    #[test]
    fn image_array_entries_checked_by_index() {
        let mut doc = complete();
        doc["image"] = json!([
            {"@type": "ImageObject", "url": "https://ok.example/1.png"},
            {"@type": "ImageObject", "url": "relative/2.png"}
        ]);
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["image[1].url"]);
    }

    #[test]
    fn single_image_object_is_index_zero() {
        let mut doc = complete();
        doc["image"] = json!({"url": 7});
        let result = validate_article_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["image[0].url"]);
        assert_eq!(result.errors()[0].message, "image[0].url must be a string");
    }
}
