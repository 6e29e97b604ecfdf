//! # Date and Duration Helpers
//!
//! Lenient date parsing for user-supplied `datePublished`/`dateModified`
//! values, plus ISO 8601 rendering and `PT{h}H{m}M` durations.
//!
//! Accepted inputs, tried in order: RFC 3339 (any offset), RFC 2822,
//! minute-precision times with `Z` or a numeric offset, naive date-times
//! (`T` or space separated, with or without seconds and fractional
//! seconds), bare `YYYY-MM-DD`, and the reduced forms `YYYY-MM` and `YYYY`
//! (first day of the month or year). Inputs without an offset are read as
//! UTC. All output is UTC.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?").expect("duration pattern is a valid regex")
});

static REDUCED_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(?:-(\d{2}))?$").expect("reduced date pattern is a valid regex")
});

const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Either a string to be parsed or an already-resolved instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt)
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(s) => parse_date(s),
            Self::Instant(dt) => Some(dt),
        }
    }
}

/// Parse a date or date-time string. Returns `None` when nothing matches.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // A trailing `Z` on a shape RFC 3339 rejects (no seconds) still means UTC.
    let naive_text = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_text, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return start_of_day(date);
    }
    parse_reduced_date(s)
}

/// `YYYY` or `YYYY-MM`, resolved to the first day of the period.
fn parse_reduced_date(s: &str) -> Option<DateTime<Utc>> {
    let caps = REDUCED_DATE_PATTERN.captures(s)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1).and_then(start_of_day)
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// Render as `YYYY-MM-DD`, or `""` if the input does not parse.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>) -> String {
    date.into()
        .resolve()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Render as full ISO 8601 with milliseconds and `Z`
/// (`2024-01-15T10:30:00.000Z`), or `""` if the input does not parse.
pub fn format_date_time<'a>(date: impl Into<DateInput<'a>>) -> String {
    date.into()
        .resolve()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

pub fn is_valid_date(date: &str) -> bool {
    parse_date(date).is_some()
}

/// Render a minute count as an ISO 8601 duration (`90` → `PT1H30M`).
///
/// Zero components are omitted; non-positive input yields `""`.
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return String::new();
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    let mut duration = String::from("PT");
    if hours > 0 {
        duration.push_str(&format!("{hours}H"));
    }
    if mins > 0 {
        duration.push_str(&format!("{mins}M"));
    }
    duration
}

/// Inverse of [`format_duration`]. Returns `0` when no `PT` component is
/// present.
pub fn parse_duration(duration: &str) -> i64 {
    let Some(caps) = DURATION_PATTERN.captures(duration) else {
        return 0;
    };

    let component = |i: usize| -> i64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    component(1).saturating_mul(60).saturating_add(component(2))
}
