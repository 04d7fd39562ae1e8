//! Data Transfer Objects for REST responses.
//!
//! Documents themselves are serialized as-is; these wrap them in the
//! `{ success, ... }` envelopes returned by the create endpoints.

pub mod comment_dto;
pub mod post_dto;

pub use comment_dto::*;
pub use post_dto::*;
