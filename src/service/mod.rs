//! Service layer: the post and comment stores.
//!
//! Each store owns one [`crate::persistence::DocumentCollection`], stamps
//! incoming documents with an id, timestamp and date, and answers queries
//! newest first. The two stores share no state.

pub mod comment_store;
pub mod post_store;

pub use comment_store::CommentStore;
pub use post_store::PostStore;
