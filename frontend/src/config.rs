//! Application configuration.
//!
//! Centralized configuration for the FraudShield frontend.
//! In development, these are hardcoded. In production, they could be
//! injected at build time.

/// Backend API base URL.
///
/// The fraudshield backend server (`fraudshield serve`).
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Versioned API prefix appended to [`BACKEND_URL`].
pub const API_PREFIX: &str = "/api/v1";

/// Application name shown in the sidebar.
pub const APP_NAME: &str = "AP FraudShield";

/// Route of the analysis results page. The task identifier travels as
/// the `taskId` query parameter.
pub const RESULTS_PATH: &str = "/analysis-results";

/// Full URL of an API path such as `/dashboard/stats`.
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", BACKEND_URL, API_PREFIX, path)
}

// =============================================================================
// Upload coordinator timings
// =============================================================================

/// Pause between a finished upload and the scanning modal opening.
pub const UPLOAD_SETTLE_MS: u32 = 500;

/// Pause between scan completion and navigation to the results page.
pub const NAVIGATE_DELAY_MS: u32 = 500;

// =============================================================================
// Scan presenter timings
// =============================================================================

/// Interval of the percentage ticker (+1 % per tick).
pub const PROGRESS_TICK_MS: u32 = 30;

/// Duration allotted to each scan step.
pub const STEP_DURATION_MS: u32 = 750;

/// A step is marked completed this long before the next one starts.
pub const STEP_COMPLETE_LEAD_MS: u32 = 100;

/// Extra delay after the last step before the completion callback fires.
pub const SCAN_FINISH_GRACE_MS: u32 = 200;

// =============================================================================
// Views
// =============================================================================

/// Live feed refresh interval.
pub const FEED_POLL_INTERVAL_MS: u32 = 30_000;

/// Default lifetime of a toast notification.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Search bar debounce.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Maximum number of rows shown in the upload page's recent list.
pub const RECENT_UPLOADS_SHOWN: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("/scan/upload"), "http://localhost:3000/api/v1/scan/upload");
    }
}
