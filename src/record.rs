//! Raw and canonical record shapes.
//!
//! Ownership model:
//! - `RawFields` is the read seam over dynamically-shaped input rows; every
//!   getter is total, so field reads are checked operations with documented
//!   defaults rather than unchecked dynamic lookups.
//! - `RawRecord` is the built-in JSON-backed implementation.
//! - `CleanedRecord` is the canonical 8-field output; its field types make
//!   the never-null invariant structural.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Asin, DetailKey};

/// Read-only, typed access into a dynamically-shaped record.
///
/// Values may be absent, null, or of unexpected type; the getters fall back
/// to documented defaults instead of failing. Unknown extra fields are
/// simply never read.
pub trait RawFields {
    /// Raw value stored under `name`, if present.
    fn raw_field(&self, name: &str) -> Option<&Value>;

    /// String view of `name`; absent, null, or non-string values yield `""`.
    fn text_field(&self, name: &str) -> &str {
        match self.raw_field(name) {
            Some(Value::String(text)) => text,
            _ => "",
        }
    }
}

/// Dynamically-shaped input record, one per raw dataset row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Record over an owned field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build from any JSON value; non-object values produce an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Insert or replace a field.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is stored.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl RawFields for RawRecord {
    fn raw_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Canonical, null-free product record produced by preprocessing.
///
/// Invariants: `parent_asin` matches `[A-Z0-9]*`; `average_rating` stays in
/// `[0, MAX_AVERAGE_RATING]`; `price` is non-negative with no upper bound;
/// the four text fields are ASCII. The numeric fields are plain `f64`/`u64`
/// and the strings plain `String`, so a residual null cannot even be
/// represented — `Default` is the typed zero record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    /// Strictly alphanumeric uppercase product identifier.
    pub parent_asin: Asin,
    /// Normalized product title.
    pub title: String,
    /// Normalized long-form description.
    pub description: String,
    /// Normalized top-level category label.
    pub main_category: String,
    /// Normalized storefront name.
    pub store: String,
    /// Star rating clamped to the configured bound.
    pub average_rating: f64,
    /// Review count, non-negative by type.
    pub rating_number: u64,
    /// Listing price, clamped at zero.
    pub price: f64,
    /// Flattened `detail_*` fields; empty unless detail inclusion is on.
    /// Serializes inline with the top-level fields.
    #[serde(flatten)]
    pub details: IndexMap<DetailKey, Value>,
}

impl CleanedRecord {
    /// Render as a raw field map, e.g. for metadata extraction over cleaned
    /// rows or for storage layers that expect dynamic records.
    pub fn to_raw(&self) -> RawRecord {
        RawRecord::from_value(serde_json::to_value(self).unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_field_defaults_to_empty() {
        let record = RawRecord::from_value(json!({
            "title": "Widget",
            "price": 9.99,
            "nothing": null,
        }));
        assert_eq!(record.text_field("title"), "Widget");
        assert_eq!(record.text_field("price"), ""); // wrong type
        assert_eq!(record.text_field("nothing"), ""); // null
        assert_eq!(record.text_field("absent"), "");
    }

    #[test]
    fn non_object_values_become_empty_records() {
        assert!(RawRecord::from_value(json!([1, 2, 3])).is_empty());
        assert!(RawRecord::from_value(json!("scalar")).is_empty());
        assert_eq!(RawRecord::from_value(json!({"a": 1})).len(), 1);
    }

    #[test]
    fn set_overwrites_fields() {
        let mut record = RawRecord::default();
        record.set("store", json!("Acme"));
        record.set("store", json!("Other"));
        assert_eq!(record.text_field("store"), "Other");
    }

    #[test]
    fn cleaned_record_default_is_typed_zero() {
        let record = CleanedRecord::default();
        assert_eq!(record.parent_asin, "");
        assert_eq!(record.average_rating, 0.0);
        assert_eq!(record.rating_number, 0);
        assert_eq!(record.price, 0.0);
        assert!(record.details.is_empty());
    }

    #[test]
    fn cleaned_record_round_trips_with_flattened_details() {
        let mut record = CleanedRecord {
            parent_asin: "B0AB12".to_string(),
            title: "Alpha O-Ring".to_string(),
            average_rating: 4.5,
            rating_number: 12,
            price: 19.99,
            ..CleanedRecord::default()
        };
        record
            .details
            .insert("detail_color".to_string(), json!("Red"));

        let encoded = serde_json::to_value(&record).expect("serializable");
        assert_eq!(encoded["parent_asin"], json!("B0AB12"));
        // Flattened: the detail key sits at the top level.
        assert_eq!(encoded["detail_color"], json!("Red"));

        let decoded: CleanedRecord = serde_json::from_value(encoded).expect("deserializable");
        assert_eq!(decoded, record);
    }

    #[test]
    fn to_raw_exposes_all_canonical_columns() {
        let raw = CleanedRecord {
            parent_asin: "B000X".to_string(),
            ..CleanedRecord::default()
        }
        .to_raw();
        assert_eq!(raw.text_field("parent_asin"), "B000X");
        assert!(raw.raw_field("price").is_some());
        assert!(raw.raw_field("rating_number").is_some());
    }
}
