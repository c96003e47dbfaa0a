mod config;
mod handlers;
mod store;

mod tests;

pub use config::{default_allowed_types, ServerConfig, DEFAULT_PORT};
pub use handlers::handle_upload;
pub use store::{DiskStore, StoredFile};

use axum::extract::{DefaultBodyLimit, Extension};
use axum::routing::post;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Builds the application router: the ingestion endpoint plus static
/// assets for everything else.
pub fn router(store: Arc<DiskStore>, static_dir: &Path) -> Router {
    Router::new()
        .route("/upload", post(handle_upload))
        .fallback_service(ServeDir::new(static_dir))
        .layer(Extension(store))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Opens the store, binds the listener, and serves until the process
/// exits.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(DiskStore::open(
        &config.upload_dir,
        config.allowed_types.clone(),
    )?);
    let app = router(store, &config.static_dir);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
