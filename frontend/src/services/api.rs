//! Read-only API client for the dashboard and results pages.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::api_url;
use crate::types::{AppError, AppResult, ChartDataPoint, DashboardStats, RecentFile, ScanResult};

async fn get_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let url = api_url(path);
    log::debug!("🌐 GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| error_detail(&body))
            .unwrap_or_else(|| response.status_text());
        return Err(AppError::Http {
            status: response.status(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Pull `detail` out of an error body, falling back to the raw text.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
    Some(detail.unwrap_or_else(|| body.trim().to_string()))
}

pub async fn fetch_dashboard_stats() -> AppResult<DashboardStats> {
    get_json("/dashboard/stats").await
}

pub async fn get_recent_files() -> AppResult<Vec<RecentFile>> {
    get_json("/files/recent").await
}

pub async fn get_chart_data() -> AppResult<Vec<ChartDataPoint>> {
    get_json("/dashboard/chart").await
}

pub async fn get_scan_result(task_id: &str) -> AppResult<ScanResult> {
    if task_id.trim().is_empty() {
        return Err(AppError::MissingTaskId);
    }
    let encoded: String = js_sys::encode_uri_component(task_id).into();
    get_json(&format!("/scan/result/{}", encoded)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_json_field() {
        assert_eq!(
            error_detail(r#"{"detail": "File too large"}"#),
            Some("File too large".to_string())
        );
        assert_eq!(error_detail("Bad Gateway\n"), Some("Bad Gateway".to_string()));
        assert_eq!(error_detail("  "), None);
    }
}
