//! # FraudShield - document fraud scanning service
//!
//! Accepts uploaded documents, runs a set of independent detectors over them
//! and serves the verdicts to the FraudShield dashboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Upload    │────▶│ Validation  │────▶│  Analysis   │────▶│ Scan store  │
//! │ (multipart) │     │ (type/size) │     │ (meta/dup/  │     │ (by task id)│
//! └─────────────┘     └─────────────┘     │    PII)     │     └─────────────┘
//!                                         └──────┬──────┘
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │ Fingerprint │
//!                                         │    index    │
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fraudshield::{scan_document, FingerprintIndex};
//!
//! let mut index = FingerprintIndex::in_memory();
//! let result = scan_document("task-1", "invoice.pdf", &bytes, &mut index)?;
//! println!("{} scored {}", result.filename, result.fraud_score);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP error rendering
//! - [`config`] - Environment driven settings
//! - [`models`] - Wire types shared with the dashboard
//! - [`validation`] - Upload checks
//! - [`analysis`] - Text extraction, detectors and scoring
//! - [`dedup`] - Duplicate fingerprint index
//! - [`store`] - In-memory scan results
//! - [`demo`] - Dashboard baseline data
//! - [`alerts`] - Alert webhook dispatch
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Scanning
pub mod analysis;
pub mod dedup;
pub mod validation;

// Serving
pub mod alerts;
pub mod api;
pub mod demo;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AlertError, IndexError, ServerError, UploadError};

pub use config::Settings;

pub use models::{
    Anomaly, ChartDataPoint, DashboardStats, RecentFile, ScanResult, Severity, UploadResponse,
};

pub use validation::{validate_upload, ALLOWED_EXTENSIONS};

pub use analysis::{analyze, scan_document, Analysis};

pub use dedup::{DuplicateMatch, Fingerprint, FingerprintIndex};

pub use store::ScanStore;

pub use alerts::AlertDispatcher;

pub use api::{router, start_server, AppState};
