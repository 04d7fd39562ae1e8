//! Persistence layer: append-only document collections on disk.
//!
//! Each collection is a single file holding one JSON document per line.
//! The whole file is loaded into memory when the collection is opened and
//! every insert is appended and synced before it becomes visible.

pub mod collection;
pub mod error;

pub use collection::DocumentCollection;
pub use error::StoreError;
