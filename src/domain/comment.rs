//! Comment documents.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::date_format;
use super::document::{Document, Fields, strip_reserved};
use super::DocumentId;

const RESERVED_KEYS: &[&str] = &["id", "postId", "timestamp", "date"];

/// A record attached to a post by reference.
///
/// `post_id` is copied verbatim from the request path and never checked
/// against the post collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Generated identifier.
    pub id: DocumentId,
    /// Identifier of the post this comment refers to.
    #[serde(rename = "postId")]
    pub post_id: String,
    /// Insert time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Localized insert date and time.
    pub date: String,
    /// Caller-supplied fields.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Document for Comment {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Merges the generated fields and the target post id onto caller input.
#[must_use]
pub fn stamp_comment(
    id: DocumentId,
    post_id: &str,
    mut fields: Fields,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Comment {
    strip_reserved(&mut fields, RESERVED_KEYS);
    Comment {
        id,
        post_id: post_id.to_string(),
        timestamp: now.timestamp_millis(),
        date: date_format::comment_date(now, offset),
        fields,
    }
}
