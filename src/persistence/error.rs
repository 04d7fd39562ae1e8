//! Storage error taxonomy.

/// Failure of a store operation.
///
/// Messages carry backend details for logs only; the HTTP layer never
/// forwards them to clients.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not persist a document.
    #[error("storage write error: {0}")]
    StorageWrite(String),

    /// The backend could not read or decode stored documents.
    #[error("storage read error: {0}")]
    StorageRead(String),

    /// No document with the given id exists.
    #[error("document not found: {0}")]
    NotFound(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
