//! File upload handlers.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::super::state::AppState;
use super::{ApiError, api_error};

/// One file written by an upload.
#[derive(Debug, Serialize)]
pub struct SavedFile {
    pub filename: String,
    pub path: String,
}

/// Response from the batch upload endpoint.
#[derive(Debug, Serialize)]
pub struct ProcessFilesResponse {
    pub success: bool,
    pub message: String,
    pub files: Vec<SavedFile>,
}

/// Response from the single image upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    pub success: bool,
    pub filename: String,
    pub url: String,
}

/// POST /process-files - Save every file in the multipart body.
pub async fn process_files(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessFilesResponse>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|e| {
            api_error(StatusCode::BAD_REQUEST, format!("Failed to read {}: {}", raw_name, e))
        })?;

        let (filename, path) = save_upload(&state.config.upload_dir, &raw_name, &bytes).await?;
        files.push(SavedFile {
            filename,
            path: path.display().to_string(),
        });
    }

    Ok(Json(ProcessFilesResponse {
        success: true,
        message: format!("Saved {} files", files.len()),
        files,
    }))
}

/// POST /upload-image - Save the first file in the multipart body.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadImageResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|e| {
            api_error(StatusCode::BAD_REQUEST, format!("Failed to read image: {}", e))
        })?;

        let (filename, _) = save_upload(&state.config.upload_dir, &raw_name, &bytes).await?;
        return Ok(Json(UploadImageResponse {
            success: true,
            url: format!("/uploads/{}", filename),
            filename,
        }));
    }

    Err(api_error(StatusCode::BAD_REQUEST, "No file field found"))
}

/// Write an upload under `dir`, returning the stored name and full path.
async fn save_upload(dir: &Path, raw_name: &str, bytes: &[u8]) -> Result<(String, PathBuf), ApiError> {
    let filename = safe_file_name(raw_name).ok_or_else(|| {
        api_error(StatusCode::BAD_REQUEST, format!("Invalid file name {:?}", raw_name))
    })?;
    let path = dir.join(&filename);
    tracing::debug!("Saving upload to {}", path.display());

    tokio::fs::write(&path, bytes).await.map_err(|e| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to write {}: {}", path.display(), e),
        )
    })?;

    Ok((filename, path))
}

/// Final path component of a client-supplied file name.
///
/// Both `/` and `\` count as separators; `.`/`..`/empty names are rejected.
pub fn safe_file_name(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
