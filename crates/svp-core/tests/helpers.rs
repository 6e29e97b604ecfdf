//! Integration test: the documented behavior of the shared helpers, as
//! consumed by generators and validators in other crates.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use svp_core::date::{format_date, format_date_time, format_duration, is_valid_date, parse_duration};
use svp_core::json::{deep_clone, safe_json_parse, safe_json_stringify};
use svp_core::text::{clean_whitespace, strip_html, truncate};
use svp_core::url::{extract_domain, is_valid_url, normalize_url};

#[test]
fn normalize_url_documented_cases() {
    assert_eq!(normalize_url("example.com"), "https://example.com/");
    assert_eq!(normalize_url(""), "");
    assert_eq!(normalize_url("not a url"), "https://not a url");
    assert!(is_valid_url(&normalize_url("shop.example.com/a?b=c")));
    assert_eq!(extract_domain(&normalize_url("shop.example.com/a")), "shop.example.com");
}

#[test]
fn duration_documented_cases() {
    assert_eq!(format_duration(90), "PT1H30M");
    assert_eq!(parse_duration("PT1H30M"), 90);
    assert_eq!(format_duration(45), "PT45M");
    assert_eq!(format_duration(120), "PT2H");
}

#[test]
fn dates_render_in_utc() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 9, 22, 15, 0).unwrap();
    assert_eq!(format_date(instant), "2024-03-09");
    assert_eq!(format_date_time(instant), "2024-03-09T22:15:00.000Z");
    assert_eq!(format_date("2024-03-09T23:30:00-02:00"), "2024-03-10");
    assert!(is_valid_date("2024-03-09"));
    assert!(!is_valid_date("next tuesday"));
}

#[test]
fn text_pipeline_for_descriptions() {
    let raw = "<p>Fresh   <b>Rust</b>\n news</p>";
    let clean = clean_whitespace(&strip_html(raw));
    assert_eq!(clean, "Fresh Rust news");
    assert_eq!(truncate(&clean, 8), "Fresh...");
}

#[test]
fn json_helpers_never_fail() {
    assert_eq!(safe_json_parse::<serde_json::Value>("{oops"), None);
    let value: serde_json::Value = safe_json_parse(r#"{"a":[1,2]}"#).unwrap();
    assert_eq!(deep_clone(&value), value);
    assert_eq!(safe_json_stringify(&value, false), r#"{"a":[1,2]}"#);
}

proptest! {
    #[test]
    fn duration_round_trips(minutes in 1i64..100_000) {
        prop_assert_eq!(parse_duration(&format_duration(minutes)), minutes);
    }

    #[test]
    fn normalized_host_paths_are_valid(host in "[a-z]{1,10}\\.(com|io)", path in "(/[a-z0-9]{1,6}){0,3}") {
        let normalized = normalize_url(&format!("{host}{path}"));
        prop_assert!(is_valid_url(&normalized), "{}", normalized);
        prop_assert_eq!(extract_domain(&normalized), host);
    }
}
