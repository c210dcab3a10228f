//! The persisted record: a string plus its derived properties.

use serde::{Serialize, Serializer};

use super::{now_micros, FilterSet, PropertySet};
use crate::engine::{analyze, matches};

/// One stored string. Its `id` is always the content hash of `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringRecord {
    /// Primary key (the SHA-256 content hash).
    pub id: String,
    /// The original string, unmodified.
    pub value: String,
    /// Properties computed when the record was created.
    pub properties: PropertySet,
    /// Creation time (Unix epoch microseconds), rendered as RFC 3339 in JSON.
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: u64,
}

impl StringRecord {
    /// Assemble a record from a value and its already-computed properties.
    pub fn new(value: impl Into<String>, properties: PropertySet, created_at: u64) -> Self {
        Self {
            id: properties.content_hash.clone(),
            value: value.into(),
            properties,
            created_at,
        }
    }

    /// Analyze `value` and stamp the record with the current time.
    pub fn analyzed(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self::new(value, properties, now_micros())
    }

    /// Whether this record satisfies every filter in `filters`.
    pub fn matches(&self, filters: &FilterSet) -> bool {
        matches(&self.value, &self.properties, filters)
    }
}

/// Render Unix epoch microseconds as an RFC 3339 UTC timestamp.
pub fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let nanos = ((micros % 1_000_000) * 1_000) as u32;
    match chrono::DateTime::from_timestamp(secs, nanos) {
        Some(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
        None => format!("{} us", micros),
    }
}

fn serialize_timestamp<S: Serializer>(micros: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(*micros))
}
