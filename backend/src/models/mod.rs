//! Domain models shared by the analysis pipeline and the HTTP API.
//!
//! - [`Severity`] - SAFE / WARNING / CRITICAL classification of a fraud score
//! - [`Anomaly`] - One finding of the analysis
//! - [`ScanResult`] - Full verdict of one document
//! - [`DashboardStats`], [`ChartDataPoint`], [`RecentFile`] - Dashboard reads
//! - [`UploadResponse`], [`AlertRequest`], [`StatusResponse`] - Request/response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// Display classification of a fraud score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Safe,
    Warning,
    Critical,
}

impl Severity {
    pub const CRITICAL_THRESHOLD: u8 = 70;
    pub const WARNING_THRESHOLD: u8 = 30;

    /// Score >= 70 is critical, >= 30 is a warning, anything else is safe.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::CRITICAL_THRESHOLD {
            Severity::Critical
        } else if score >= Self::WARNING_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Safe
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Safe => "SAFE",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Scan Results
// =============================================================================

/// A single finding reported by the analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

impl Anomaly {
    pub fn new(kind: impl Into<String>, description: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Verdict of one scanned document, served by `GET /api/v1/scan/result/{task_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub file_id: String,
    pub filename: String,
    pub fraud_score: u8,
    pub severity: Severity,
    pub is_duplicate: bool,
    /// Task identifier of the document this one duplicates, when known.
    pub duplicate_source_id: Option<String>,
    pub anomalies: Vec<Anomaly>,
    /// Cleaned text the analysis ran on (truncated).
    pub text_content: String,
    /// Milliseconds spent analysing.
    pub processing_time: u64,
    /// Mean confidence of the anomalies, 0 when there are none.
    pub confidence: f64,
    pub status: String,
    pub scanned_at: DateTime<Utc>,
}

// =============================================================================
// Dashboard
// =============================================================================

/// Aggregate counts shown on the dashboard cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_scanned: u64,
    pub fraud_detected: u64,
    /// Prevented losses in rupees.
    pub total_savings: f64,
    pub pending_review: u64,
    pub accuracy_rate: Option<f64>,
}

/// One day of the weekly uploads vs fraud chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartDataPoint {
    /// Day label ("Mon", "Tue", ...)
    pub date: String,
    pub uploads: u32,
    pub fraud: u32,
}

/// A recently scanned file, as listed by the live feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentFile {
    pub id: String,
    pub filename: String,
    pub department: String,
    pub status: Severity,
    pub fraud_score: u8,
    pub scanned_at: DateTime<Utc>,
}

impl RecentFile {
    /// Department shown for documents uploaded through the API.
    pub const UPLOAD_DEPARTMENT: &'static str = "Direct Upload";
}

impl From<&ScanResult> for RecentFile {
    fn from(result: &ScanResult) -> Self {
        Self {
            id: result.file_id.clone(),
            filename: result.filename.clone(),
            department: Self::UPLOAD_DEPARTMENT.to_string(),
            status: result.severity,
            fraud_score: result.fraud_score,
            scanned_at: result.scanned_at,
        }
    }
}

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// Body returned by `POST /api/v1/scan/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub task_id: String,
    pub message: String,
}

impl UploadResponse {
    pub const CONCLUDED: &'static str = "Unified fraud analysis concluded.";

    pub fn concluded(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            message: Self::CONCLUDED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRequest {
    pub message: String,
}

/// `{"status": ..., "message": ...}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into(), message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_score(0), Severity::Safe);
        assert_eq!(Severity::from_score(29), Severity::Safe);
        assert_eq!(Severity::from_score(30), Severity::Warning);
        assert_eq!(Severity::from_score(69), Severity::Warning);
        assert_eq!(Severity::from_score(70), Severity::Critical);
        assert_eq!(Severity::from_score(100), Severity::Critical);
    }

    #[test]
    fn test_severity_wire_format() {
        assert_eq!(serde_json::to_value(Severity::Critical).unwrap(), json!("CRITICAL"));
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_anomaly_serializes_type_field() {
        let anomaly = Anomaly::new("PII Detected", "Contains: PAN_DETECTED", 1.4);
        let value = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(value["type"], "PII Detected");
        assert_eq!(value["confidence"], 1.0);
    }

    #[test]
    fn test_status_response_omits_missing_message() {
        let value = serde_json::to_value(StatusResponse::new("sent")).unwrap();
        assert_eq!(value, json!({ "status": "sent" }));
    }
}
