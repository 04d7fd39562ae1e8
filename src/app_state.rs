//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::BlogConfig;
use crate::domain::{Clock, SystemClock};
use crate::persistence::StoreError;
use crate::service::{CommentStore, PostStore};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Post collection.
    pub posts: Arc<PostStore>,
    /// Comment collection.
    pub comments: Arc<CommentStore>,
}

impl AppState {
    /// Opens both stores as configured, stamping documents with wall-clock
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageRead`] if either collection file
    /// cannot be loaded.
    pub async fn open(config: &BlogConfig) -> Result<Self, StoreError> {
        Self::open_with_clock(config, Arc::new(SystemClock)).await
    }

    /// Opens both stores with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageRead`] if either collection file
    /// cannot be loaded.
    pub async fn open_with_clock(
        config: &BlogConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let posts = PostStore::open(
            config.posts_path(),
            Arc::clone(&clock),
            config.display_offset,
        )
        .await?;
        let comments =
            CommentStore::open(config.comments_path(), clock, config.display_offset).await?;

        Ok(Self {
            posts: Arc::new(posts),
            comments: Arc::new(comments),
        })
    }
}
