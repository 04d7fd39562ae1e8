//! Post store: insert, list newest first, get by id.

use std::path::Path;
use std::sync::Arc;

use chrono::FixedOffset;

use crate::domain::{Clock, DocumentId, Fields, Post, sort_by_recency, stamp_post};
use crate::persistence::error::StoreResult;
use crate::persistence::{DocumentCollection, StoreError};

/// Process-wide owner of all post documents.
#[derive(Debug)]
pub struct PostStore {
    collection: DocumentCollection<Post>,
    clock: Arc<dyn Clock>,
    display_offset: FixedOffset,
}

impl PostStore {
    /// Creates a store over an already opened collection.
    #[must_use]
    pub fn new(
        collection: DocumentCollection<Post>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            collection,
            clock,
            display_offset,
        }
    }

    /// Opens the post collection at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageRead`] if the existing file cannot be
    /// loaded.
    pub async fn open(
        path: impl AsRef<Path>,
        clock: Arc<dyn Clock>,
        display_offset: FixedOffset,
    ) -> StoreResult<Self> {
        let collection = DocumentCollection::open(path).await?;
        Ok(Self::new(collection, clock, display_offset))
    }

    /// Stamps `fields` with a new id, the current timestamp and date, and
    /// persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageWrite`] if the post cannot be persisted.
    pub async fn insert(&self, fields: Fields) -> StoreResult<Post> {
        let post = stamp_post(
            DocumentId::new(),
            fields,
            self.clock.now(),
            self.display_offset,
        );
        let post = self.collection.append(post).await?;
        tracing::info!(post_id = %post.id, timestamp = post.timestamp, "post created");
        Ok(post)
    }

    /// Returns every post, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageRead`] on backend failure.
    pub async fn list_all(&self) -> StoreResult<Vec<Post>> {
        Ok(sort_by_recency(self.collection.all().await))
    }

    /// Returns the post whose id matches `id`.
    ///
    /// Matching is exact: strings that are not ids in their canonical
    /// lowercase hyphenated form match nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such post exists.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Post> {
        let not_found = || StoreError::NotFound(id.to_string());
        let wanted = id
            .parse::<DocumentId>()
            .ok()
            .filter(|parsed| parsed.to_string() == id)
            .ok_or_else(not_found)?;
        self.collection
            .find(|post| post.id == wanted)
            .await
            .ok_or_else(not_found)
    }

    /// Number of stored posts.
    pub async fn count(&self) -> usize {
        self.collection.len().await
    }
}
