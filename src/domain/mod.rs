//! Domain layer: document types, identifiers, stamping, and time.
//!
//! Posts and comments are schema-less documents. Each carries a handful of
//! generated fields (`id`, `timestamp`, `date`) next to whatever the caller
//! supplied, which is stored verbatim.

pub mod clock;
pub mod comment;
pub mod date_format;
pub mod document;
pub mod document_id;
pub mod post;

pub use clock::{Clock, ManualClock, SystemClock};
pub use comment::{Comment, stamp_comment};
pub use document::{Document, Fields, sort_by_recency};
pub use document_id::DocumentId;
pub use post::{Post, stamp_post};
