//! HTTP handlers for the server.

pub mod snapshot;
pub mod upload;

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Body returned with every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Log `message` and wrap it as a `{ success: false }` response.
pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    let message = message.into();
    tracing::error!("{}", message);
    (
        status,
        Json(ErrorResponse {
            success: false,
            message: format!("Error: {}", message),
        }),
    )
}
