//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use super::handlers::system::HealthResponse;
use crate::error::ErrorResponse;

/// Generated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "blog-backend",
        description = "Posts and per-post comments, newest first."
    ),
    paths(
        crate::api::handlers::post::create_post,
        crate::api::handlers::post::list_posts,
        crate::api::handlers::post::get_post,
        crate::api::handlers::comment::create_comment,
        crate::api::handlers::comment::list_comments,
        crate::api::handlers::system::health_handler,
    ),
    components(schemas(ErrorResponse, HealthResponse)),
    tags(
        (name = "Posts", description = "Post collection"),
        (name = "Comments", description = "Comments attached to posts"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;
