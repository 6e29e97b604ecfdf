use serde_json::Value;

use svp_core::{SchemaType, ValidationIssue, ValidationResult};

use super::base::{
    is_record, is_truthy, validate_number, validate_recommended, validate_required, validate_url,
};
use super::{entries, Checklist};

/// Validate a `Product` document.
///
/// Requires `name`. Warns when `description`, `image` or `offers` are
/// missing. Every offer (single object or array) must be an object with
/// `price` and `priceCurrency`; a non-object offer is reported once under
/// `offers[i]`. An `aggregateRating` must be an object with a `ratingValue`
/// in `[0, 5]` and a `reviewCount` of at least 1.
pub fn validate_product_schema(schema: &Value) -> ValidationResult {
    let mut check = Checklist::start(schema);

    if !is_record(schema) {
        return check.finish(SchemaType::Product);
    }
    let product = schema;

    check.expect_type(product, SchemaType::Product);

    validate_required(product.get("name"), "name", &mut check.errors);

    validate_recommended(
        product.get("description"),
        "description",
        &mut check.warnings,
        Some("description is recommended for better SEO"),
    );
    validate_recommended(
        product.get("image"),
        "image",
        &mut check.warnings,
        Some("image is recommended for rich results in search engines"),
    );
    validate_recommended(
        product.get("offers"),
        "offers",
        &mut check.warnings,
        Some("offers is recommended to show price information"),
    );

    // A bare brand string is accepted without further checks.
    if let Some(brand) = product.get("brand").filter(|b| is_record(b)) {
        validate_required(brand.get("name"), "brand.name", &mut check.errors);
    }

    let offers = product.get("offers");
    if is_truthy(offers) {
        for (index, offer) in entries(offers).enumerate() {
            if !is_record(offer) {
                check.errors.push(ValidationIssue::error(
                    format!("offers[{index}]"),
                    "offer must be an object",
                ));
                continue;
            }
            validate_required(
                offer.get("price"),
                &format!("offers[{index}].price"),
                &mut check.errors,
            );
            validate_required(
                offer.get("priceCurrency"),
                &format!("offers[{index}].priceCurrency"),
                &mut check.errors,
            );
            validate_url(
                offer.get("url"),
                &format!("offers[{index}].url"),
                &mut check.errors,
            );
        }
    }

    let rating = product.get("aggregateRating");
    if is_truthy(rating) {
        match rating.filter(|r| is_record(r)) {
            None => check.errors.push(ValidationIssue::error(
                "aggregateRating",
                "aggregateRating must be an object",
            )),
            Some(rating) => {
                let value = rating.get("ratingValue");
                let count = rating.get("reviewCount");
                validate_required(value, "aggregateRating.ratingValue", &mut check.errors);
                validate_required(count, "aggregateRating.reviewCount", &mut check.errors);
                validate_number(
                    value,
                    "aggregateRating.ratingValue",
                    &mut check.errors,
                    Some(0.0),
                    Some(5.0),
                );
                validate_number(
                    count,
                    "aggregateRating.reviewCount",
                    &mut check.errors,
                    Some(1.0),
                    None,
                );
            }
        }
    }

    check.check_images(product.get("image"));

    check.finish(SchemaType::Product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    fn base() -> Value {
        json!({"@context": "https://schema.org", "@type": "Product", "name": "Widget"})
    }

    #[test]
    fn single_offer_product_warns_only() {
        let mut doc = base();
        doc["offers"] = json!({"@type": "Offer", "price": "10", "priceCurrency": "USD"});
        let result = validate_product_schema(&doc);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(fields(result.warnings()), vec!["description", "image"]);
    }

    #[test]
    fn missing_name_and_wrong_type() {
        let result = validate_product_schema(&json!({
            "@context": "https://schema.org",
            "@type": "Thing"
        }));
        assert_eq!(fields(result.errors()), vec!["@type", "name"]);
        assert_eq!(
            fields(result.warnings()),
            vec!["description", "image", "offers"]
        );
    }

    #[test]
    fn non_object_offer_reported_once_by_index() {
        let mut doc = base();
        doc["offers"] = json!([
            {"@type": "Offer", "price": "10", "priceCurrency": "USD"},
            "ten dollars"
        ]);
        let result = validate_product_schema(&doc);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "offers[1]");
        assert_eq!(result.errors()[0].message, "offer must be an object");
    }

    #[test]
    fn offer_fields_checked_per_index() {
        let mut doc = base();
        doc["offers"] = json!([
            {"price": "", "priceCurrency": "USD", "url": "shop"},
            {"price": "5"}
        ]);
        let result = validate_product_schema(&doc);
        assert_eq!(
            fields(result.errors()),
            vec!["offers[0].price", "offers[0].url", "offers[1].priceCurrency"]
        );
    }

    #[test]
    fn numeric_price_is_accepted() {
        let mut doc = base();
        doc["offers"] = json!({"price": 10, "priceCurrency": "EUR"});
        assert!(validate_product_schema(&doc).is_valid());
    }

    #[test]
    fn brand_object_needs_name() {
        let mut doc = base();
        doc["brand"] = json!({"@type": "Organization"});
        assert_eq!(fields(validate_product_schema(&doc).errors()), vec!["brand.name"]);

        doc["brand"] = json!("Acme");
        assert!(validate_product_schema(&doc).is_valid());
    }

    #[test]
    fn aggregate_rating_must_be_object() {
        let mut doc = base();
        doc["aggregateRating"] = json!(4.5);
        let result = validate_product_schema(&doc);
        assert_eq!(result.errors()[0].message, "aggregateRating must be an object");
    }

    #[test]
    fn nested_arrays_read_as_records_without_fields() {
        let mut doc = base();
        doc["brand"] = json!([{"name": "Acme"}]);
        doc["offers"] = json!([[{"price": "10", "priceCurrency": "USD"}]]);
        doc["aggregateRating"] = json!([{"ratingValue": 4, "reviewCount": 2}]);
        let result = validate_product_schema(&doc);
        assert_eq!(
            fields(result.errors()),
            vec![
                "brand.name",
                "offers[0].price",
                "offers[0].priceCurrency",
                "aggregateRating.ratingValue",
                "aggregateRating.reviewCount"
            ]
        );
    }

    #[test]
    fn aggregate_rating_ranges() {
        let mut doc = base();
        doc["aggregateRating"] = json!({"ratingValue": 7, "reviewCount": 0.5});
        let result = validate_product_schema(&doc);
        assert_eq!(
            result.errors().iter().map(|e| e.message.as_str()).collect::<Vec<_>>(),
            vec![
                "aggregateRating.ratingValue must be at most 5",
                "aggregateRating.reviewCount must be at least 1"
            ]
        );
    }

    #[test]
    fn zero_rating_fails_presence_not_range() {
        let mut doc = base();
        doc["aggregateRating"] = json!({"ratingValue": 0, "reviewCount": 3});
        let result = validate_product_schema(&doc);
        assert_eq!(fields(result.errors()), vec!["aggregateRating.ratingValue"]);
        assert_eq!(
            result.errors()[0].message,
            "aggregateRating.ratingValue is required"
        );
    }

    #[test]
    fn string_rating_is_not_a_number() {
        let mut doc = base();
        doc["aggregateRating"] = json!({"ratingValue": "4.5", "reviewCount": 10});
        let result = validate_product_schema(&doc);
        assert_eq!(
            result.errors()[0].message,
            "aggregateRating.ratingValue must be a number"
        );
    }

    #[test]
    fn image_entries_checked() {
        let mut doc = base();
        doc["image"] = json!([{"url": "https://cdn.example/a.png"}, {"url": "b.png"}]);
        assert_eq!(fields(validate_product_schema(&doc).errors()), vec!["image[1].url"]);
    }
}
