use svp_core::url::normalize_url;
use svp_core::{Availability, SchemaType};

use crate::document::{AggregateRating, OneOrMany, Offer, Organization, ProductDocument};
use crate::input::{present, ProductInput};

use super::image_objects;

const BEST_RATING: u32 = 5;
const WORST_RATING: u32 = 1;

/// Generate a `Product` document.
///
/// `offers` is emitted only when both `price` and `priceCurrency` are
/// present, and `aggregateRating` only when both `ratingValue` and
/// `reviewCount` are non-zero. An `availability` that is not already an
/// `https://` URI is replaced with `https://schema.org/InStock`. Ratings
/// are always on a 1–5 scale.
pub fn generate_product_schema(input: &ProductInput) -> ProductDocument {
    let mut doc = ProductDocument::new(input.name.clone());

    doc.description = present(&input.description).map(str::to_string);
    doc.image = input.image.as_ref().and_then(image_objects);
    doc.brand = present(&input.brand).map(Organization::new);
    doc.sku = present(&input.sku).map(str::to_string);
    doc.mpn = present(&input.mpn).map(str::to_string);
    doc.gtin = present(&input.gtin).map(str::to_string);

    if let (Some(price), Some(currency)) = (present(&input.price), present(&input.price_currency)) {
        doc.offers = Some(OneOrMany::One(Offer {
            kind: SchemaType::Offer,
            price: price.to_string(),
            price_currency: currency.to_string(),
            availability: present(&input.availability).map(availability_uri),
            url: present(&input.url).map(normalize_url),
        }));
    }

    let rating = input.rating_value.filter(|v| *v != 0.0 && !v.is_nan());
    let reviews = input.review_count.filter(|n| *n != 0);
    if let (Some(rating_value), Some(review_count)) = (rating, reviews) {
        doc.aggregate_rating = Some(AggregateRating {
            kind: SchemaType::AggregateRating,
            rating_value,
            review_count,
            best_rating: BEST_RATING,
            worst_rating: WORST_RATING,
        });
    }

    tracing::debug!(
        name = %doc.name,
        has_offers = doc.offers.is_some(),
        has_rating = doc.aggregate_rating.is_some(),
        "generated Product"
    );

    doc
}

fn availability_uri(value: &str) -> String {
    if value.starts_with("https://") {
        value.to_string()
    } else {
        Availability::InStock.uri().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::JsonLd;
    use serde_json::json;

    fn minimal() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            ..Default::default()
        }
    }

    fn priced() -> ProductInput {
        ProductInput {
            price: Some("19.99".to_string()),
            price_currency: Some("USD".to_string()),
            ..minimal()
        }
    }

    #[test]
    fn minimal_product() {
        let doc = generate_product_schema(&minimal());
        assert_eq!(
            doc.to_value().unwrap(),
            json!({"@context": "https://schema.org", "@type": "Product", "name": "Widget"})
        );
    }

    #[test]
    fn brand_string_is_wrapped_as_organization() {
        let input = ProductInput {
            brand: Some("Acme".to_string()),
            ..minimal()
        };
        let value = generate_product_schema(&input).to_value().unwrap();
        assert_eq!(value["brand"], json!({"@type": "Organization", "name": "Acme"}));
    }

    #[test]
    fn identifiers_copied_verbatim() {
        let input = ProductInput {
            sku: Some("SKU-1".to_string()),
            mpn: Some("MPN 2".to_string()),
            gtin: Some("00012345600012".to_string()),
            ..minimal()
        };
        let doc = generate_product_schema(&input);
        assert_eq!(doc.sku.as_deref(), Some("SKU-1"));
        assert_eq!(doc.mpn.as_deref(), Some("MPN 2"));
        assert_eq!(doc.gtin.as_deref(), Some("00012345600012"));
    }

    #[test]
    fn offers_require_price_and_currency() {
        let only_price = ProductInput {
            price: Some("10".to_string()),
            ..minimal()
        };
        assert!(generate_product_schema(&only_price).offers.is_none());

        let value = generate_product_schema(&priced()).to_value().unwrap();
        assert_eq!(
            value["offers"],
            json!({"@type": "Offer", "price": "19.99", "priceCurrency": "USD"})
        );
    }

    #[test]
    fn availability_uri_passes_through() {
        let input = ProductInput {
            availability: Some("https://schema.org/PreOrder".to_string()),
            ..priced()
        };
        let value = generate_product_schema(&input).to_value().unwrap();
        assert_eq!(value["offers"]["availability"], "https://schema.org/PreOrder");
    }

    #[test]
    fn non_uri_availability_is_overwritten_with_in_stock() {
        for raw in ["OutOfStock", "out of stock", "http://schema.org/OutOfStock"] {
            let input = ProductInput {
                availability: Some(raw.to_string()),
                ..priced()
            };
            let value = generate_product_schema(&input).to_value().unwrap();
            assert_eq!(value["offers"]["availability"], "https://schema.org/InStock", "{raw}");
        }
    }

    #[test]
    fn offer_url_is_normalized() {
        let input = ProductInput {
            url: Some("shop.example.com/widget".to_string()),
            ..priced()
        };
        let doc = generate_product_schema(&input);
        let offer = doc.offers.unwrap().into_vec().remove(0);
        assert_eq!(offer.url.as_deref(), Some("https://shop.example.com/widget"));
    }

    #[test]
    fn aggregate_rating_uses_fixed_scale() {
        let input = ProductInput {
            rating_value: Some(4.5),
            review_count: Some(89),
            ..minimal()
        };
        let value = generate_product_schema(&input).to_value().unwrap();
        assert_eq!(
            value["aggregateRating"],
            json!({
                "@type": "AggregateRating",
                "ratingValue": 4.5,
                "reviewCount": 89,
                "bestRating": 5,
                "worstRating": 1
            })
        );
    }

    #[test]
    fn aggregate_rating_needs_both_values_non_zero() {
        let zero_rating = ProductInput {
            rating_value: Some(0.0),
            review_count: Some(3),
            ..minimal()
        };
        assert!(generate_product_schema(&zero_rating).aggregate_rating.is_none());

        let no_reviews = ProductInput {
            rating_value: Some(4.0),
            ..minimal()
        };
        assert!(generate_product_schema(&no_reviews).aggregate_rating.is_none());
    }

    #[test]
    fn product_images_follow_collapsing_rule() {
        let input = ProductInput {
            image: Some(OneOrMany::One("cdn.example.com/w.png".to_string())),
            ..minimal()
        };
        let value = generate_product_schema(&input).to_value().unwrap();
        assert_eq!(value["image"]["url"], "https://cdn.example.com/w.png");
    }
}
