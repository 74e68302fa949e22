//! # Error Types
//!
//! This module defines error types used throughout the siroco library.

use thiserror::Error;

/// Main error type for siroco operations
#[derive(Debug, Error)]
pub enum SirocoError {
    /// Layout configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Input table is missing columns or is malformed
    #[error("Table error: {0}")]
    Table(String),

    /// QR payload could not be encoded
    #[error("QR error: {0}")]
    Qr(String),

    /// Image encoding or saving error
    #[error("Image error: {0}")]
    Image(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
