//! Post response envelopes.

use serde::Serialize;

use crate::domain::Post;

/// Response body for `POST /api/posts`.
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    /// Always `true`.
    pub success: bool,
    /// The stored post, including its generated fields.
    pub post: Post,
}

impl From<Post> for CreatePostResponse {
    fn from(post: Post) -> Self {
        Self {
            success: true,
            post,
        }
    }
}
