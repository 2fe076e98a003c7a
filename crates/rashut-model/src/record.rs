//! Flat task/idea records as returned by the query service
//!
//! A record is an ordered map of field name to string value. Nothing is
//! guaranteed to be present: predicates treat a missing or empty field as
//! "no match" rather than an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field names used by the aggregation predicates
pub mod fields {
    /// Shared-authority flag (`"true"` / `"false"`)
    pub const COMMON_SHAAM: &str = "common_shaam";
    /// Approved start year
    pub const START_YEAR: &str = "apro_start_year";
    /// Lifecycle status code
    pub const STATUS: &str = "status";
    /// Category / phase code
    pub const CATEGORY: &str = "statut_idea_changeme";
    /// Verification status code
    pub const VERIFICATION: &str = "verification_statut";
    /// Completion fraction (nominally 0..=1)
    pub const PERCENT_COMPLETE: &str = "percent_complete";
    /// Cancellation year, present only for cancelled records
    pub const CANCELED_YEAR: &str = "canceled_year";
}

/// One task/idea record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "IndexMap<String, String>")]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    #[inline]
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a field
    #[inline]
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Raw field value, including empty strings
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field value if present and non-empty
    #[inline]
    #[must_use]
    pub fn present(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|v| !v.is_empty())
    }

    /// Whether the field is present with a non-empty value
    #[inline]
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.present(field).is_some()
    }

    /// Exact string comparison; missing fields never match
    #[inline]
    #[must_use]
    pub fn field_eq(&self, field: &str, expected: &str) -> bool {
        self.get(field) == Some(expected)
    }

    /// Whether the field equals any of the given codes
    #[inline]
    #[must_use]
    pub fn field_in(&self, field: &str, codes: &[&str]) -> bool {
        self.get(field).is_some_and(|v| codes.contains(&v))
    }

    /// Numeric value of a field, `None` when missing, empty or unparsable
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.present(field)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Record> for IndexMap<String, String> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

/// Wire form accepted on input: JSON exports carry numbers and booleans
/// alongside strings.
#[derive(Deserialize)]
#[serde(transparent)]
struct RawRecord(IndexMap<String, Option<Scalar>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Nested(serde::de::IgnoredAny),
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        raw.0
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value? {
                    Scalar::Text(s) => s,
                    Scalar::Bool(b) => b.to_string(),
                    Scalar::Int(i) => i.to_string(),
                    Scalar::Float(f) => f.to_string(),
                    Scalar::Nested(_) => return None,
                };
                Some((key, text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_not_present() {
        let record = Record::new().with(fields::CANCELED_YEAR, "");
        assert_eq!(record.get(fields::CANCELED_YEAR), Some(""));
        assert!(!record.has(fields::CANCELED_YEAR));
    }

    #[test]
    fn number_trims_and_rejects_garbage() {
        let record = Record::new()
            .with("a", " 0.75 ")
            .with("b", "n/a")
            .with("c", "");
        assert_eq!(record.number("a"), Some(0.75));
        assert_eq!(record.number("b"), None);
        assert_eq!(record.number("c"), None);
        assert_eq!(record.number("missing"), None);
    }

    #[test]
    fn deserializes_mixed_scalars() {
        let json = r#"{"id": 1, "common_shaam": true, "apro_start_year": 2025,
                       "percent_complete": 0.5, "status": "8", "canceled_year": null,
                       "tags": ["x"]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("id"), Some("1"));
        assert_eq!(record.get(fields::COMMON_SHAAM), Some("true"));
        assert_eq!(record.get(fields::START_YEAR), Some("2025"));
        assert_eq!(record.get(fields::PERCENT_COMPLETE), Some("0.5"));
        assert_eq!(record.get(fields::CANCELED_YEAR), None);
        assert_eq!(record.get("tags"), None);
    }

    #[test]
    fn field_in_matches_codes() {
        let record = Record::new().with(fields::CATEGORY, "4");
        assert!(record.field_in(fields::CATEGORY, &["1", "4"]));
        assert!(!record.field_in(fields::CATEGORY, &["2"]));
        assert!(!Record::new().field_in(fields::CATEGORY, &["1", "4"]));
    }
}
