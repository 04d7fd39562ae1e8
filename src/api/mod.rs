//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Post and comment endpoints are mounted under `/api`; anything else
//! falls through to the static asset directory.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::map_response;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::BlogConfig;
use crate::error::timeout_as_json;

/// Builds the API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the complete application: API routes, optional Swagger UI,
/// static assets, and the tracing, timeout and CORS layers.
pub fn build_app(state: AppState, config: &BlogConfig) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(map_response(timeout_as_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
