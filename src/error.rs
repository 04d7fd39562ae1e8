//! HTTP-facing error types.
//!
//! [`ApiError`] records which endpoint failed and why. Each endpoint has
//! one fixed, localized failure message; backend details are logged and
//! never sent to the client.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::StoreError;

/// JSON body of every failure response.
///
/// ```json
/// { "success": false, "message": "記事が見つかりません" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Fixed localized message for the failing endpoint.
    pub message: String,
}

/// The five API operations, used to select the failure response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /api/posts`
    CreatePost,
    /// `GET /api/posts`
    ListPosts,
    /// `GET /api/posts/{id}`
    GetPost,
    /// `POST /api/comments/{post_id}`
    CreateComment,
    /// `GET /api/comments/{post_id}`
    ListComments,
}

impl Endpoint {
    /// Message returned to clients when this endpoint fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::CreatePost => "投稿に失敗しました",
            Self::ListPosts => "記事の取得に失敗しました",
            Self::GetPost => "記事が見つかりません",
            Self::CreateComment => "コメント投稿に失敗しました",
            Self::ListComments => "コメントの取得に失敗しました",
        }
    }

    /// Status used when the store behind this endpoint fails.
    ///
    /// Post lookups answer 404 for every failure, read errors included.
    #[must_use]
    pub const fn failure_status(self) -> StatusCode {
        match self {
            Self::GetPost => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreatePost => "create post",
            Self::ListPosts => "list posts",
            Self::GetPost => "get post",
            Self::CreateComment => "create comment",
            Self::ListComments => "list comments",
        };
        f.write_str(name)
    }
}

/// Failure of an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store backing the endpoint failed.
    #[error("{endpoint} failed: {source}")]
    Store {
        /// Endpoint that was being served.
        endpoint: Endpoint,
        /// Underlying store failure.
        #[source]
        source: StoreError,
    },

    /// The request body was present but not a JSON object.
    #[error("{endpoint} rejected malformed body: {detail}")]
    MalformedBody {
        /// Endpoint that was being served.
        endpoint: Endpoint,
        /// Parser diagnostic, for logs.
        detail: String,
    },
}

impl ApiError {
    /// Wraps a store failure for `endpoint`.
    #[must_use]
    pub const fn store(endpoint: Endpoint, source: StoreError) -> Self {
        Self::Store { endpoint, source }
    }

    /// Endpoint that produced this error.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Store { endpoint, .. } | Self::MalformedBody { endpoint, .. } => *endpoint,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Store { endpoint, .. } => endpoint.failure_status(),
            Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Store {
                source: StoreError::NotFound(_),
                ..
            } => tracing::debug!(error = %self, "request failed"),
            Self::MalformedBody { .. } => tracing::warn!(error = %self, "request failed"),
            Self::Store { .. } => tracing::error!(error = %self, "request failed"),
        }

        let body = ErrorResponse {
            success: false,
            message: self.endpoint().failure_message().to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Message sent when a request exceeds the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "リクエストがタイムアウトしました";

/// Gives timed-out requests the same JSON failure body as every other error.
///
/// The timeout layer answers `408` with an empty body; anything else passes
/// through untouched.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("request timed out");
    let body = ErrorResponse {
        success: false,
        message: TIMEOUT_MESSAGE.to_string(),
    };
    (StatusCode::REQUEST_TIMEOUT, axum::Json(body)).into_response()
}
