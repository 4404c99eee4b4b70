//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Dashboard Types** - aggregate stats and chart series
//! - **Feed Types** - recently scanned files
//! - **Scan Types** - full analysis result of one document
//! - **Error Types** - Frontend error handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::Severity;

// =============================================================================
// Dashboard Types
// =============================================================================

/// Aggregate counts shown on the dashboard cards.
///
/// Every field defaults to zero so a sparse response still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    /// Documents processed
    pub total_scanned: u64,
    /// Suspicious documents
    pub fraud_detected: u64,
    /// Prevented losses in rupees
    pub total_savings: f64,
    /// Awaiting manual action
    pub pending_review: u64,
    /// Detection accuracy in percent; absent when the backend does not report it
    pub accuracy_rate: Option<f64>,
}

/// One bar group of the weekly chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Day label ("Mon", "Tue", ...)
    pub date: String,
    pub uploads: u32,
    pub fraud: u32,
}

// =============================================================================
// Feed Types
// =============================================================================

/// A recently scanned file, as listed by the live feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentFile {
    pub id: String,
    pub filename: String,
    pub department: String,
    pub status: Severity,
    pub fraud_score: u8,
    pub scanned_at: DateTime<Utc>,
}

// =============================================================================
// Scan Types
// =============================================================================

/// A single finding reported by the analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

/// Full analysis of one uploaded document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub file_id: String,
    pub filename: String,
    pub fraud_score: u8,
    pub severity: Severity,
    #[serde(default)]
    pub is_duplicate: bool,
    #[serde(default)]
    pub duplicate_source_id: Option<String>,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    /// Milliseconds spent by the backend
    pub processing_time: u64,
    pub confidence: f64,
    pub scanned_at: DateTime<Utc>,
}

/// Body returned by the upload endpoint.
///
/// `task_id` is optional on purpose: a body without it still completes the
/// upload flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never reached the server or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Http { status: u16, message: String },
    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
    /// File upload failed.
    #[error("Upload error: {0}")]
    Upload(String),
    /// Results page opened without a usable task identifier.
    #[error("No task identifier provided")]
    MissingTaskId,
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_stats_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"total_scanned": 0}"#).unwrap();
        assert_eq!(stats.total_scanned, 0);
        assert_eq!(stats.fraud_detected, 0);
        assert_eq!(stats.total_savings, 0.0);
        assert_eq!(stats.accuracy_rate, None);
    }

    #[test]
    fn test_scan_result_deserialization() {
        let json = r#"{
            "file_id": "123e4567-e89b-12d3-a456-426614174000",
            "filename": "invoice_992.pdf",
            "file_url": "/api/v1/files/123e4567",
            "fraud_score": 100,
            "severity": "CRITICAL",
            "is_duplicate": true,
            "duplicate_source_id": null,
            "anomalies": [
                {"type": "Duplicate Discovery", "description": "Visual or text match found.", "confidence": 1.0}
            ],
            "processing_time": 42,
            "confidence": 1.0,
            "status": "completed",
            "scanned_at": "2025-03-01T10:00:00Z"
        }"#;

        let result: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.is_duplicate);
        assert_eq!(result.anomalies[0].kind, "Duplicate Discovery");
    }

    #[test]
    fn test_upload_response_without_task_id() {
        let response: UploadResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(response.task_id, None);
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Http { status: 413, message: "too large".into() };
        assert_eq!(err.to_string(), "Server error (413): too large");
    }
}
