//! Shared document behaviour for posts and comments.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::DocumentId;

/// Caller-supplied document fields, stored verbatim.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A document that can live in a [`crate::persistence::DocumentCollection`].
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Generated identifier of the document.
    fn id(&self) -> DocumentId;

    /// Insert time in milliseconds since the Unix epoch.
    fn timestamp(&self) -> i64;
}

/// Orders documents newest first.
///
/// `docs` must be in insertion order. Documents sharing a timestamp keep
/// the later insertion in front.
#[must_use]
pub fn sort_by_recency<T: Document>(mut docs: Vec<T>) -> Vec<T> {
    docs.reverse();
    docs.sort_by_key(|doc| std::cmp::Reverse(doc.timestamp()));
    docs
}

/// Drops caller keys that collide with generated fields.
pub(crate) fn strip_reserved(fields: &mut Fields, reserved: &[&str]) {
    for key in reserved {
        fields.remove(*key);
    }
}
