//! blog-backend server entry point.
//!
//! Opens the post and comment collections and starts the Axum HTTP server.

use tracing_subscriber::EnvFilter;

use blog_backend::api;
use blog_backend::app_state::AppState;
use blog_backend::config::BlogConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BlogConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        "starting blog-backend"
    );

    // Open both collections
    let app_state = AppState::open(&config).await?;

    // Build router
    let app = api::build_app(app_state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
