//! Comment store: insert and list by post, newest first.

use std::path::Path;
use std::sync::Arc;

use chrono::FixedOffset;

use crate::domain::{Clock, Comment, DocumentId, Fields, sort_by_recency, stamp_comment};
use crate::persistence::DocumentCollection;
use crate::persistence::error::StoreResult;

/// Process-wide owner of all comment documents.
///
/// Comments reference posts by id only; nothing here consults the post
/// store.
#[derive(Debug)]
pub struct CommentStore {
    collection: DocumentCollection<Comment>,
    clock: Arc<dyn Clock>,
    display_offset: FixedOffset,
}

impl CommentStore {
    /// Creates a store over an already opened collection.
    #[must_use]
    pub fn new(
        collection: DocumentCollection<Comment>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            collection,
            clock,
            display_offset,
        }
    }

    /// Opens the comment collection at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::StoreError::StorageRead`] if the
    /// existing file cannot be loaded.
    pub async fn open(
        path: impl AsRef<Path>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> StoreResult<Self> {
        let collection = DocumentCollection::open(path).await?;
        Ok(Self::new(collection, clock, display_offset))
    }

    /// Stores a comment on `post_id`. The post does not have to exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::StoreError::StorageWrite`] if the
    /// comment cannot be persisted.
    pub async fn insert(&self, post_id: &str, fields: Fields) -> StoreResult<Comment> {
        let comment = stamp_comment(
            DocumentId::new(),
            post_id,
            fields,
            self.clock.now(),
            self.display_offset,
        );
        let comment = self.collection.append(comment).await?;
        tracing::info!(comment_id = %comment.id, post_id, "comment created");
        Ok(comment)
    }

    /// Returns the comments on `post_id`, most recent first.
    ///
    /// Unknown post ids yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::StoreError::StorageRead`] on backend
    /// failure.
    pub async fn list_by_post(&self, post_id: &str) -> StoreResult<Vec<Comment>> {
        let matching = self
            .collection
            .filter(|comment| comment.post_id == post_id)
            .await;
        Ok(sort_by_recency(matching))
    }

    /// Number of stored comments across all posts.
    pub async fn count(&self) -> usize {
        self.collection.len().await
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::ManualClock;
    use crate::persistence::StoreError;
    use serde_json::json;

    async fn make_store(dir: &tempfile::TempDir, clock: &ManualClock) -> CommentStore {
        let offset = FixedOffset::east_opt(0).unwrap_or_else(|| panic!("valid offset"));
        let Ok(store) = CommentStore::open(
            dir.path().join("comments.db"),
            Arc::new(clock.clone()),
            offset,
        )
        .await
        else {
            panic!("open failed");
        };
        store
    }

    fn text(value: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("text".to_string(), json!(value));
        fields
    }

    #[tokio::test]
    async fn insert_on_unknown_post_succeeds() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let clock = ManualClock::at_ms(60_000);
        let store = make_store(&dir, &clock).await;

        let Ok(comment) = store.insert("xyz", text("hi")).await else {
            panic!("insert failed");
        };
        assert_eq!(comment.post_id, "xyz");
        assert_eq!(comment.date, "1970/1/1 00:01");

        let Ok(listed) = store.list_by_post("xyz").await else {
            panic!("list failed");
        };
        assert_eq!(listed, vec![comment]);
    }

    #[tokio::test]
    async fn list_by_post_filters_and_orders() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let clock = ManualClock::at_ms(0);
        let store = make_store(&dir, &clock).await;

        for (post, body) in [("p1", "first"), ("p2", "other"), ("p1", "second")] {
            clock.advance_ms(1_000);
            assert!(store.insert(post, text(body)).await.is_ok());
        }

        let Ok(listed) = store.list_by_post("p1").await else {
            panic!("list failed");
        };
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].fields.get("text"), Some(&json!("second")));
        assert_eq!(listed[1].fields.get("text"), Some(&json!("first")));
        assert!(listed.iter().all(|c| c.post_id == "p1"));
    }

    #[tokio::test]
    async fn list_by_unknown_post_is_empty() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let clock = ManualClock::at_ms(0);
        let store = make_store(&dir, &clock).await;
        let _ = store.insert("p1", text("hello")).await;

        let listed = store.list_by_post("nobody").await;
        assert!(matches!(listed.as_deref(), Ok([])));
    }

    #[tokio::test]
    async fn write_failure_surfaces_storage_write() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let offset = FixedOffset::east_opt(0).unwrap_or_else(|| panic!("valid offset"));
        let Ok(store) = CommentStore::open(
            dir.path().join("gone").join("comments.db"),
            Arc::new(ManualClock::at_ms(0)),
            offset,
        )
        .await
        else {
            panic!("open failed");
        };

        let result = store.insert("p1", text("lost")).await;
        assert!(matches!(result, Err(StoreError::StorageWrite(_))));
        assert_eq!(store.count().await, 0);
    }
}
