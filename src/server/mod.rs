//! # HTTP Server for Uploads and State Snapshots
//!
//! Serves the editor page, stores uploaded files and persists JSON state
//! snapshots posted by the page.
//!
//! ## Usage
//!
//! ```bash
//! siroco serve --listen 0.0.0.0:8000 --uploads uploads --states estados
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | Editor page |
//! | `GET /static/*` | Files from the static directory |
//! | `GET /uploads/*` | Previously uploaded files |
//! | `POST /process-files` | Save every file of a multipart body |
//! | `POST /upload-image` | Save one file, return its URL |
//! | `POST /guardar-estado` | Persist a JSON snapshot if it changed |

mod handlers;
mod state;
mod static_files;

pub use handlers::upload::safe_file_name;
pub use state::{AppState, SNAPSHOT_EXPIRATION_SECS, ServerConfig, SnapshotOutcome, snapshot_path};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::SirocoError;

/// Upload bodies above this size are rejected.
const UPLOAD_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let upload_dir = state.config.upload_dir.clone();
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(static_files::index_handler))
        .route(
            "/process-files",
            post(handlers::upload::process_files).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/upload-image",
            post(handlers::upload::upload_image).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route("/guardar-estado", post(handlers::snapshot::save_state))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Create the directories the server reads from and writes to.
pub fn prepare_dirs(config: &ServerConfig) -> Result<(), SirocoError> {
    for dir in [&config.upload_dir, &config.static_dir, &config.state_dir] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use siroco::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), siroco::error::SirocoError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:8000".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), SirocoError> {
    prepare_dirs(&config)?;
    let app_state = Arc::new(AppState::new(config.clone()));

    // Spawn background snapshot cleanup task
    tokio::spawn(cleanup_snapshots(app_state.clone()));

    let app = router(app_state);

    tracing::info!("Listening on: {}", config.listen_addr);
    tracing::info!("Uploads: {}", config.upload_dir.display());
    tracing::info!("Snapshots: {}", config.state_dir.display());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            SirocoError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| SirocoError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Background task to forget snapshots that can no longer collide.
async fn cleanup_snapshots(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    let expiration = Duration::from_secs(SNAPSHOT_EXPIRATION_SECS);

    loop {
        interval.tick().await;
        let now = Instant::now();

        let mut snapshots = state.snapshots.write().await;
        let before = snapshots.len();
        snapshots.retain(|_, v| now.duration_since(v.saved_at) < expiration);
        let after = snapshots.len();
        if before != after {
            tracing::debug!(
                "Cleaned up {} expired snapshot entries ({} remaining)",
                before - after,
                after
            );
        }
    }
}
