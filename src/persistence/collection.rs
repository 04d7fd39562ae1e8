//! File-backed document collection.
//!
//! [`DocumentCollection`] keeps every document of one type in memory behind
//! a [`tokio::sync::RwLock`] and mirrors it to an append-only file, one
//! JSON document per line.
//!
//! # Concurrency
//!
//! - Reads clone out of the cache and may run concurrently.
//! - Appends hold the write lock across the file write and sync, so
//!   concurrent inserts are serialized and readers never observe a
//!   document that is not yet on disk.
//! - An append runs on its own task. Dropping the caller's future does not
//!   stop it halfway, so the file and the cache always agree.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::error::{StoreError, StoreResult};
use crate::domain::Document;

/// Largest tolerated share of undecodable lines, in percent.
///
/// Above this the file is treated as corrupt and opening fails.
const CORRUPT_LINE_THRESHOLD_PERCENT: usize = 10;

/// An append-only collection of documents of type `T`.
#[derive(Debug)]
pub struct DocumentCollection<T> {
    path: Arc<PathBuf>,
    docs: Arc<RwLock<Vec<T>>>,
}

impl<T: Document> DocumentCollection<T> {
    /// Opens the collection stored at `path`, loading every document.
    ///
    /// A missing file is an empty collection; it is created on the first
    /// append. Blank lines are ignored and undecodable lines are skipped
    /// with a warning while they stay within the corruption threshold.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageRead`] if the file exists but cannot be
    /// read, or if too many of its lines fail to decode.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(StoreError::StorageRead(format!(
                    "{}: {e}",
                    path.display()
                )));
            }
        };

        let docs = decode_lines(&path, &contents)?;
        tracing::info!(path = %path.display(), documents = docs.len(), "collection loaded");

        Ok(Self {
            path: Arc::new(path),
            docs: Arc::new(RwLock::new(docs)),
        })
    }

    /// Persists `doc` and adds it to the collection.
    ///
    /// The write and the cache update run on a spawned task, so an append
    /// that has started always finishes even if the caller goes away.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageWrite`] if the document cannot be
    /// encoded, written or synced. The in-memory view is left unchanged.
    pub async fn append(&self, doc: T) -> StoreResult<T> {
        let mut line = serde_json::to_string(&doc)
            .map_err(|e| StoreError::StorageWrite(format!("{}: {e}", self.path.display())))?;
        line.push('\n');

        let path = Arc::clone(&self.path);
        let docs = Arc::clone(&self.docs);
        let task = tokio::spawn(async move {
            let mut docs = docs.write().await;
            write_line(&path, &line)
                .await
                .map_err(|e| StoreError::StorageWrite(format!("{}: {e}", path.display())))?;
            docs.push(doc.clone());
            Ok::<_, StoreError>(doc)
        });

        task.await.map_err(|e| {
            StoreError::StorageWrite(format!("{}: append task failed: {e}", self.path.display()))
        })?
    }

    /// Returns every document in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.docs.read().await.clone()
    }

    /// Returns the documents matching `predicate`, in insertion order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .read()
            .await
            .iter()
            .filter(|doc| predicate(*doc))
            .cloned()
            .collect()
    }

    /// Returns the first document matching `predicate`.
    pub async fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs.read().await.iter().find(|doc| predicate(*doc)).cloned()
    }

    /// Number of documents in the collection.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Returns `true` if the collection holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

async fn write_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.sync_data().await
}

fn decode_lines<T: Document>(path: &Path, contents: &str) -> StoreResult<Vec<T>> {
    let mut docs = Vec::new();
    let mut total = 0usize;
    let mut corrupt = 0usize;

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        total += 1;
        match serde_json::from_str::<T>(line) {
            Ok(doc) => docs.push(doc),
            Err(e) => {
                corrupt += 1;
                tracing::warn!(
                    path = %path.display(),
                    line = index + 1,
                    error = %e,
                    "skipping undecodable document"
                );
            }
        }
    }

    if corrupt * 100 > total * CORRUPT_LINE_THRESHOLD_PERCENT {
        return Err(StoreError::StorageRead(format!(
            "{}: {corrupt} of {total} lines are corrupt",
            path.display()
        )));
    }

    Ok(docs)
}
