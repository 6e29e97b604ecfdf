//! # Schema.org Vocabulary — Single Source of Truth
//!
//! Defines the `@context` literal, the `SchemaType` enum with every `@type`
//! tag the system emits or recognizes, and the enumeration URIs used as
//! property values (`availability`, `eventStatus`, `eventAttendanceMode`).
//!
//! Only `Article` and `Product` are validated in depth. The remaining
//! top-level types are listed so callers can recognize them and report
//! them as unsupported rather than unknown.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SvpError;

/// The only `@context` value a document may carry to be well-formed.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Every `@type` tag known to the system.
///
/// Top-level types come first, followed by the nested object types that
/// appear inside them (`author`, `image`, `offers`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaType {
    Article,
    Product,
    Recipe,
    HowTo,
    #[serde(rename = "FAQPage")]
    FaqPage,
    Event,
    Person,
    Organization,
    Course,
    ImageObject,
    Offer,
    AggregateRating,
    Review,
    Rating,
    PostalAddress,
}

impl SchemaType {
    /// Returns all known types in declaration order.
    pub fn all() -> &'static [SchemaType] {
        &[
            Self::Article,
            Self::Product,
            Self::Recipe,
            Self::HowTo,
            Self::FaqPage,
            Self::Event,
            Self::Person,
            Self::Organization,
            Self::Course,
            Self::ImageObject,
            Self::Offer,
            Self::AggregateRating,
            Self::Review,
            Self::Rating,
            Self::PostalAddress,
        ]
    }

    /// Returns the literal `@type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Product => "Product",
            Self::Recipe => "Recipe",
            Self::HowTo => "HowTo",
            Self::FaqPage => "FAQPage",
            Self::Event => "Event",
            Self::Person => "Person",
            Self::Organization => "Organization",
            Self::Course => "Course",
            Self::ImageObject => "ImageObject",
            Self::Offer => "Offer",
            Self::AggregateRating => "AggregateRating",
            Self::Review => "Review",
            Self::Rating => "Rating",
            Self::PostalAddress => "PostalAddress",
        }
    }

    /// Whether documents of this type have a dedicated validator.
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Article | Self::Product)
    }

    /// Whether this tag names a document root rather than a nested object.
    pub fn is_top_level(&self) -> bool {
        match self {
            Self::Article
            | Self::Product
            | Self::Recipe
            | Self::HowTo
            | Self::FaqPage
            | Self::Event
            | Self::Person
            | Self::Organization
            | Self::Course => true,
            Self::ImageObject
            | Self::Offer
            | Self::AggregateRating
            | Self::Review
            | Self::Rating
            | Self::PostalAddress => false,
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = SvpError;

    /// Parse an exact, case-sensitive `@type` tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SvpError::UnsupportedInput(format!("unknown schema type: {s:?}")))
    }
}

/// Offer availability values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    InStock,
    OutOfStock,
    PreOrder,
    BackOrder,
    Discontinued,
    LimitedAvailability,
}

impl Availability {
    pub fn all() -> &'static [Availability] {
        &[
            Self::InStock,
            Self::OutOfStock,
            Self::PreOrder,
            Self::BackOrder,
            Self::Discontinued,
            Self::LimitedAvailability,
        ]
    }

    /// Full `https://schema.org/...` URI.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::InStock => "https://schema.org/InStock",
            Self::OutOfStock => "https://schema.org/OutOfStock",
            Self::PreOrder => "https://schema.org/PreOrder",
            Self::BackOrder => "https://schema.org/BackOrder",
            Self::Discontinued => "https://schema.org/Discontinued",
            Self::LimitedAvailability => "https://schema.org/LimitedAvailability",
        }
    }
}

/// Event status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Scheduled,
    Cancelled,
    Postponed,
    Rescheduled,
    MovedOnline,
}

impl EventStatus {
    pub fn all() -> &'static [EventStatus] {
        &[
            Self::Scheduled,
            Self::Cancelled,
            Self::Postponed,
            Self::Rescheduled,
            Self::MovedOnline,
        ]
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::Scheduled => "https://schema.org/EventScheduled",
            Self::Cancelled => "https://schema.org/EventCancelled",
            Self::Postponed => "https://schema.org/EventPostponed",
            Self::Rescheduled => "https://schema.org/EventRescheduled",
            Self::MovedOnline => "https://schema.org/EventMovedOnline",
        }
    }
}

/// Event attendance mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAttendanceMode {
    Offline,
    Online,
    Mixed,
}

impl EventAttendanceMode {
    pub fn all() -> &'static [EventAttendanceMode] {
        &[Self::Offline, Self::Online, Self::Mixed]
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Self::Offline => "https://schema.org/OfflineEventAttendanceMode",
            Self::Online => "https://schema.org/OnlineEventAttendanceMode",
            Self::Mixed => "https://schema.org/MixedEventAttendanceMode",
        }
    }
}
