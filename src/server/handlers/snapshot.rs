//! State snapshot handler.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::super::state::{AppState, SnapshotOutcome};
use super::{ApiError, api_error};

/// Response from the snapshot endpoint.
#[derive(Debug, Serialize)]
pub struct SaveStateResponse {
    pub success: bool,
    pub message: String,
    /// Path of the snapshot file, omitted when nothing changed
    #[serde(rename = "archivo", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// POST /guardar-estado - Persist a JSON state snapshot if it changed.
///
/// The file is written by a background task; the response does not wait for it.
pub async fn save_state(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SaveStateResponse>, ApiError> {
    let snapshot: Value = serde_json::from_slice(&body)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", e)))?;

    match state.record_snapshot(&snapshot, chrono::Local::now()).await {
        SnapshotOutcome::Unchanged => Ok(Json(SaveStateResponse {
            success: true,
            message: "No changes to save".to_string(),
            file: None,
        })),
        SnapshotOutcome::Accepted(path) => {
            let file = path.display().to_string();
            tokio::spawn(write_snapshot(path, snapshot));
            Ok(Json(SaveStateResponse {
                success: true,
                message: "State saved".to_string(),
                file: Some(file),
            }))
        }
    }
}

/// Write a snapshot in the background, logging the outcome.
async fn write_snapshot(path: PathBuf, snapshot: Value) {
    match write_snapshot_file(&path, &snapshot).await {
        Ok(()) => tracing::info!("State saved to {}", path.display()),
        Err(e) => tracing::error!("Failed to save state file {}: {}", path.display(), e),
    }
}

/// Write a snapshot as pretty-printed JSON, creating its directory.
async fn write_snapshot_file(path: &Path, snapshot: &Value) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let json = serde_json::to_vec_pretty(snapshot)?;
    tokio::fs::write(path, json).await
}
