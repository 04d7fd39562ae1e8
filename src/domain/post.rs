//! Post documents.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::date_format;
use super::document::{Document, Fields, strip_reserved};
use super::DocumentId;

/// Keys generated at insert time; caller values under these names are dropped.
const RESERVED_KEYS: &[&str] = &["id", "timestamp", "date"];

/// A top-level content record.
///
/// `id`, `timestamp` and `date` are generated; everything else the caller
/// sent (title, body, ...) lives in `fields` and is flattened back into the
/// same JSON object on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Generated identifier, immutable after insert.
    pub id: DocumentId,
    /// Insert time in milliseconds since the Unix epoch; the sort key.
    pub timestamp: i64,
    /// Localized insert date, informational only.
    pub date: String,
    /// Caller-supplied fields.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Document for Post {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Merges the generated fields onto caller input.
///
/// Pure: the identifier and the instant are supplied by the caller.
#[must_use]
pub fn stamp_post(
    id: DocumentId,
    mut fields: Fields,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Post {
    strip_reserved(&mut fields, RESERVED_KEYS);
    Post {
        id,
        timestamp: now.timestamp_millis(),
        date: date_format::post_date(now, offset),
        fields,
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        let serde_json::Value::Object(map) = value else {
            panic!("expected object");
        };
        map
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap_or_else(|| panic!("valid offset"))
    }

    #[test]
    fn stamp_keeps_caller_fields() {
        let id = DocumentId::new();
        let post = stamp_post(id, fields(json!({"title": "A", "body": "text"})), at(1_000), utc());

        assert_eq!(post.id, id);
        assert_eq!(post.timestamp, 1_000);
        assert_eq!(post.date, "1970/1/1");
        assert_eq!(post.fields.get("title"), Some(&json!("A")));
        assert_eq!(post.fields.get("body"), Some(&json!("text")));
    }

    #[test]
    fn stamp_overrides_reserved_keys() {
        let id = DocumentId::new();
        let post = stamp_post(
            id,
            fields(json!({"id": "mine", "timestamp": 1, "date": "yesterday", "title": "A"})),
            at(5_000),
            utc(),
        );

        let Ok(value) = serde_json::to_value(&post) else {
            panic!("serialization failed");
        };
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["timestamp"], json!(5_000));
        assert_eq!(value["date"], json!("1970/1/1"));
        assert_eq!(value["title"], json!("A"));
    }

    #[test]
    fn serializes_flat() {
        let post = stamp_post(
            DocumentId::new(),
            fields(json!({"title": "A", "tags": ["x", "y"], "meta": {"draft": false}})),
            at(0),
            utc(),
        );
        let Ok(value) = serde_json::to_value(&post) else {
            panic!("serialization failed");
        };
        assert_eq!(value["tags"], json!(["x", "y"]));
        assert_eq!(value["meta"], json!({"draft": false}));

        let Ok(back) = serde_json::from_value::<Post>(value) else {
            panic!("deserialization failed");
        };
        assert_eq!(back, post);
    }
}
