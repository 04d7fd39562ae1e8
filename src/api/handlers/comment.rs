//! Comment handlers: create and list per post.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use super::decode_fields;
use crate::api::dto::CreateCommentResponse;
use crate::app_state::AppState;
use crate::error::{ApiError, Endpoint, ErrorResponse};

/// `POST /api/comments/{post_id}` — Store a comment on a post.
///
/// The post is not required to exist.
///
/// # Errors
///
/// Returns [`ApiError`] if the body is not a JSON object or the comment
/// cannot be persisted.
#[utoipa::path(
    post,
    path = "/api/comments/{post_id}",
    tag = "Comments",
    summary = "Create a comment",
    description = "Stores the JSON object as a comment on `post_id`, adding `id`, `postId`, `timestamp` and `date`. The post id is not validated.",
    params(
        ("post_id" = String, Path, description = "Id of the commented post"),
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Comment stored", body = serde_json::Value),
        (status = 400, description = "JSON body is not an object", body = ErrorResponse),
        (status = 500, description = "Comment could not be stored", body = ErrorResponse),
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let fields = decode_fields(&headers, &body, Endpoint::CreateComment)?;
    let comment = state
        .comments
        .insert(&post_id, fields)
        .await
        .map_err(|e| ApiError::store(Endpoint::CreateComment, e))?;

    Ok(Json(CreateCommentResponse::from(comment)))
}

/// `GET /api/comments/{post_id}` — List a post's comments, newest first.
///
/// # Errors
///
/// Returns [`ApiError`] if the comment collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/comments/{post_id}",
    tag = "Comments",
    summary = "List comments",
    description = "Returns the comments whose `postId` equals the path parameter, most recent first. Unknown ids yield an empty array.",
    params(
        ("post_id" = String, Path, description = "Id of the commented post"),
    ),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<serde_json::Value>),
        (status = 500, description = "Comments could not be read", body = ErrorResponse),
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = state
        .comments
        .list_by_post(&post_id)
        .await
        .map_err(|e| ApiError::store(Endpoint::ListComments, e))?;

    Ok(Json(comments))
}

/// Comment routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/comments/{post_id}",
        post(create_comment).get(list_comments),
    )
}
