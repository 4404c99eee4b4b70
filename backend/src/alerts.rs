//! Alert dispatch to an optional webhook.
//!
//! Without `ALERT_WEBHOOK_URL` alerts are only logged. With it, each alert is
//! POSTed as `{"text": ..., "source": "fraudshield"}`.

use serde::Serialize;
use std::time::Duration;

use crate::error::AlertError;
use crate::models::ScanResult;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    source: &'static str,
}

/// How an alert left the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Webhook,
    LogOnly,
}

#[derive(Debug, Clone)]
pub struct AlertDispatcher {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl AlertDispatcher {
    pub fn new(webhook_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, webhook_url }
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }

    pub async fn send(&self, message: &str) -> Result<Delivery, AlertError> {
        let Some(url) = &self.webhook_url else {
            tracing::info!(alert = message, "🚨 Alert raised (no webhook configured)");
            return Ok(Delivery::LogOnly);
        };

        let response = self
            .client
            .post(url)
            .json(&WebhookPayload { text: message, source: "fraudshield" })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertError::Rejected(status.as_u16()));
        }

        tracing::info!(alert = message, "🚨 Alert delivered to webhook");
        Ok(Delivery::Webhook)
    }
}

/// Alert text for a critical verdict.
pub fn critical_message(result: &ScanResult) -> String {
    let kinds: Vec<&str> = result.anomalies.iter().map(|a| a.kind.as_str()).collect();
    format!(
        "CRITICAL: {} scored {}/100 ({})",
        result.filename,
        result.fraud_score,
        if kinds.is_empty() { "no anomalies".to_string() } else { kinds.join(", ") }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Anomaly, Severity};
    use chrono::Utc;

    #[tokio::test]
    async fn test_log_only_without_webhook() {
        let alerts = AlertDispatcher::new(None);
        assert!(!alerts.has_webhook());
        assert_eq!(alerts.send("hello").await.unwrap(), Delivery::LogOnly);
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_an_error() {
        let alerts = AlertDispatcher::new(Some("http://127.0.0.1:9/hook".into()));
        assert!(matches!(alerts.send("hello").await, Err(AlertError::Request(_))));
    }

    #[test]
    fn test_critical_message() {
        let result = ScanResult {
            file_id: "t".into(),
            filename: "invoice.pdf".into(),
            fraud_score: 100,
            severity: Severity::Critical,
            is_duplicate: true,
            duplicate_source_id: None,
            anomalies: vec![Anomaly::new("Duplicate Discovery", "match", 1.0)],
            text_content: String::new(),
            processing_time: 1,
            confidence: 1.0,
            status: "completed".into(),
            scanned_at: Utc::now(),
        };
        assert_eq!(
            critical_message(&result),
            "CRITICAL: invoice.pdf scored 100/100 (Duplicate Discovery)"
        );
    }
}
