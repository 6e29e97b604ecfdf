//! JSON helpers that report failure through sentinels instead of errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Parse `json` into `T`, or `None` on any parse or shape failure.
pub fn safe_json_parse<T: DeserializeOwned>(json: &str) -> Option<T> {
    serde_json::from_str(json).ok()
}

/// Encode `value` as JSON text (two-space indent when `pretty`), or `""`
/// if it cannot be represented.
pub fn safe_json_stringify<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.unwrap_or_default()
}

/// Structural copy of a document tree.
///
/// A `Value` can only hold JSON-representable data, so the copy is exact:
/// nothing is dropped the way a serialize/parse round trip would drop it.
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}

pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}
