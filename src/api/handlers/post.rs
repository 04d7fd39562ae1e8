//! Post handlers: create, list, get.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::decode_fields;
use crate::api::dto::CreatePostResponse;
use crate::app_state::AppState;
use crate::error::{ApiError, Endpoint, ErrorResponse};

/// `POST /api/posts` — Store a new post.
///
/// # Errors
///
/// Returns [`ApiError`] if the body is not a JSON object or the post
/// cannot be persisted.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    summary = "Create a post",
    description = "Stores the JSON object as a new post, adding a generated `id`, a millisecond `timestamp` and a display `date`.",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Post stored", body = serde_json::Value),
        (status = 400, description = "JSON body is not an object", body = ErrorResponse),
        (status = 500, description = "Post could not be stored", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let fields = decode_fields(&headers, &body, Endpoint::CreatePost)?;
    let post = state
        .posts
        .insert(fields)
        .await
        .map_err(|e| ApiError::store(Endpoint::CreatePost, e))?;

    Ok(Json(CreatePostResponse::from(post)))
}

/// `GET /api/posts` — List all posts, newest first.
///
/// # Errors
///
/// Returns [`ApiError`] if the post collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns every post sorted by `timestamp`, most recent first.",
    responses(
        (status = 200, description = "All posts", body = Vec<serde_json::Value>),
        (status = 500, description = "Posts could not be read", body = ErrorResponse),
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(|e| ApiError::store(Endpoint::ListPosts, e))?;

    Ok(Json(posts))
}

/// `GET /api/posts/{id}` — Fetch one post.
///
/// # Errors
///
/// Returns [`ApiError`] (404) if the post does not exist or cannot be read.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    summary = "Get a post",
    description = "Returns the post with the given id.",
    params(
        ("id" = String, Path, description = "Post id"),
    ),
    responses(
        (status = 200, description = "Post", body = serde_json::Value),
        (status = 404, description = "Post not found", body = ErrorResponse),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .posts
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::store(Endpoint::GetPost, e))?;

    Ok(Json(post))
}

/// Post routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        .route("/posts/{id}", get(get_post))
}
