//! Error types for the FraudShield scanning service.
//!
//! - [`UploadError`] - Rejected uploads (client errors)
//! - [`IndexError`] - Fingerprint index persistence
//! - [`AlertError`] - Alert webhook delivery
//! - [`ServerError`] - Top-level HTTP errors, rendered as `{"detail": ...}`
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

// =============================================================================
// Upload Errors
// =============================================================================

/// Reasons an uploaded document is refused before analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// No `file` part, or a part without a filename.
    #[error("Filename is required")]
    MissingFilename,

    /// Extension outside the accepted list.
    #[error("File type '{extension}' not supported. Allowed: {allowed}")]
    UnsupportedType { extension: String, allowed: String },

    #[error("Empty file received")]
    EmptyFile,

    /// Larger than the configured limit (in whole MiB).
    #[error("File size exceeds maximum limit of {limit_mb}MB")]
    TooLarge { limit_mb: usize },

    /// The multipart body could not be read.
    #[error("Multipart error: {0}")]
    Multipart(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

// =============================================================================
// Index Errors
// =============================================================================

/// Errors from the fingerprint index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Index IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Alert Errors
// =============================================================================

/// Errors while forwarding an alert to the webhook.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Alert request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Webhook answered with a non-2xx status.
    #[error("Alert webhook rejected the message ({0})")]
    Rejected(u16),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Scan result with task_id '{0}' not found")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Alert(#[from] AlertError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Upload(e) => e.status(),
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Unauthorized => StatusCode::FORBIDDEN,
            ServerError::Index(_)
            | ServerError::Alert(_)
            | ServerError::Internal(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "❌ Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "⚠️ Request rejected");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
