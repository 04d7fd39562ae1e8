//! Comment response envelopes.

use serde::Serialize;

use crate::domain::Comment;

/// Response body for `POST /api/comments/{post_id}`.
#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    /// Always `true`.
    pub success: bool,
    /// The stored comment.
    pub comment: Comment,
}

impl From<Comment> for CreateCommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            success: true,
            comment,
        }
    }
}
