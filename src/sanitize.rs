//! Field sanitizers: identifier cleanup, numeric clamping, and tolerant
//! detail-blob flattening.
//!
//! Every function here is total. Unparsable input recovers to a typed zero
//! value or an empty container; the "recover to zero" policy is a
//! return-value contract, not caught-exception control flow.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::details::DETAIL_KEY_PREFIX;
use crate::text::TextNormalizer;
use crate::types::{Asin, DetailKey};

/// Uppercase `value` and strip every character outside `[A-Z0-9]`.
pub fn clean_parent_asin(value: &str) -> Asin {
    value
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Best-effort numeric view of an optional JSON value.
///
/// Numbers pass through, numeric strings parse after trimming, booleans
/// coerce to 1/0. Absent values, anything else, and non-finite parses are
/// `None` so the clamped-range guarantees downstream hold for every input.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|parsed| parsed.is_finite())
}

/// Clean a float field.
///
/// Unparsable input recovers to `0.0`, negatives clamp to `0.0`, and values
/// above `max_bound` (when given) clamp down to it.
pub fn clean_float(value: Option<&Value>, max_bound: Option<f64>) -> f64 {
    let parsed = coerce_f64(value).unwrap_or(0.0);
    if parsed < 0.0 {
        return 0.0;
    }
    match max_bound {
        Some(bound) if parsed > bound => bound,
        _ => parsed,
    }
}

/// Clean an integer field: parse via float, truncate toward zero, floor at
/// zero. The unsigned return type carries the non-negativity guarantee.
pub fn clean_int(value: Option<&Value>) -> u64 {
    let truncated = coerce_f64(value).unwrap_or(0.0).trunc();
    if truncated <= 0.0 { 0 } else { truncated as u64 }
}

/// Flatten a pseudo-structured detail blob into `detail_*` keys.
///
/// The blob arrives single-quoted (`{'Weight': '2 lbs'}`); parsing swaps the
/// quote style and tries JSON. Any parse failure (including apostrophes
/// inside values) or a non-object payload yields an empty map — never an
/// error. Keys are trimmed, lowercased, space-to-underscore, and prefixed.
/// String values run through `normalize_text`; numbers and booleans pass
/// through unchanged; null becomes an empty string; other shapes are
/// stringified.
pub fn parse_details(raw: &str, text: &TextNormalizer) -> IndexMap<DetailKey, Value> {
    let swapped = raw.replace('\'', "\"");
    let Ok(Value::Object(entries)) = serde_json::from_str::<Value>(&swapped) else {
        return IndexMap::new();
    };

    let mut flat = IndexMap::with_capacity(entries.len());
    for (key, value) in entries {
        let normalized_key = format!(
            "{DETAIL_KEY_PREFIX}{}",
            key.trim().to_lowercase().replace(' ', "_")
        );
        let cleaned = match value {
            Value::String(content) => Value::String(text.normalize_text(&content)),
            Value::Number(_) | Value::Bool(_) => value,
            Value::Null => Value::String(String::new()),
            other => Value::String(other.to_string()),
        };
        flat.insert(normalized_key, cleaned);
    }
    flat
}
