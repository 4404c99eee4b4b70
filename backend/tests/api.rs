use fraudshield::{router, AppState, Settings};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};

const RESET_KEY: &str = "test-reset-key";

const INVOICE: &str = "%PDF-1.4\n1 0 obj\n<< /Creator (Word) /CreationDate (D:20190301) >>\nendobj\nBT (Tax invoice 7781 issued by the Irrigation Department in 2019 for canal lining works, payable within thirty days) Tj ET\n%%EOF";

async fn spawn_app(settings: Settings) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(settings));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn test_settings() -> Settings {
    Settings {
        admin_reset_key: Some(RESET_KEY.to_string()),
        ..Settings::default()
    }
}

async fn upload(base: &str, filename: &str, bytes: Vec<u8>) -> reqwest::Response {
    let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
    reqwest::Client::new()
        .post(format!("{}/api/v1/scan/upload", base))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

async fn upload_ok(base: &str, filename: &str, bytes: Vec<u8>) -> String {
    let response = upload(base, filename, bytes).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Unified fraud analysis concluded.");
    body["task_id"].as_str().unwrap().to_string()
}

async fn get_json(url: String) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_reports_version() {
    let base = spawn_app(test_settings()).await;
    for path in ["/health", "/api/v1/health"] {
        let (status, body) = get_json(format!("{}{}", base, path)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }
}

#[tokio::test]
async fn upload_then_fetch_result() {
    let base = spawn_app(test_settings()).await;
    let task_id = upload_ok(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;

    let (status, result) = get_json(format!("{}/api/v1/scan/result/{}", base, task_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["file_id"], task_id.as_str());
    assert_eq!(result["filename"], "invoice.pdf");
    assert_eq!(result["fraud_score"], 0);
    assert_eq!(result["severity"], "SAFE");
    assert_eq!(result["is_duplicate"], false);
    assert_eq!(result["status"], "completed");
}

#[tokio::test]
async fn second_identical_upload_is_a_duplicate() {
    let base = spawn_app(test_settings()).await;
    let first = upload_ok(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;
    let second = upload_ok(&base, "invoice-copy.pdf", INVOICE.as_bytes().to_vec()).await;
    assert_ne!(first, second);

    let (_, result) = get_json(format!("{}/api/v1/scan/result/{}", base, second)).await;
    assert_eq!(result["is_duplicate"], true);
    assert_eq!(result["duplicate_source_id"], first.as_str());
    assert_eq!(result["fraud_score"], 100);
    assert_eq!(result["severity"], "CRITICAL");
    assert_eq!(result["anomalies"][0]["type"], "Duplicate Discovery");
}

#[tokio::test]
async fn upload_rejects_bad_input() {
    let base = spawn_app(test_settings()).await;

    let response = upload(&base, "malware.exe", b"MZ".to_vec()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("File type '.exe' not supported"));

    let response = upload(&base, "empty.pdf", Vec::new()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Empty file received");
}

#[tokio::test]
async fn upload_over_limit_is_413() {
    let settings = Settings {
        max_file_size: 1024 * 1024,
        ..test_settings()
    };
    let base = spawn_app(settings).await;

    let response = upload(&base, "big.pdf", vec![b'a'; 1024 * 1024 + 1]).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "File size exceeds maximum limit of 1MB");
}

#[tokio::test]
async fn unknown_result_is_404() {
    let base = spawn_app(test_settings()).await;
    let (status, body) = get_json(format!("{}/api/v1/scan/result/nope", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Scan result with task_id 'nope' not found");
}

#[tokio::test]
async fn demo_results_resolve() {
    let base = spawn_app(test_settings()).await;
    let (status, result) = get_json(format!("{}/api/v1/scan/result/demo-5521", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["severity"], "CRITICAL");
    assert_eq!(result["is_duplicate"], true);
}

#[tokio::test]
async fn dashboard_reflects_live_uploads() {
    let base = spawn_app(test_settings()).await;

    let (_, before) = get_json(format!("{}/api/v1/dashboard/stats", base)).await;
    assert_eq!(before["total_scanned"], 14205);
    assert_eq!(before["accuracy_rate"], 99.7);

    let task_id = upload_ok(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;

    let (_, after) = get_json(format!("{}/api/v1/dashboard/stats", base)).await;
    assert_eq!(after["total_scanned"], 14206);

    let (_, recent) = get_json(format!("{}/api/v1/files/recent", base)).await;
    let recent = recent.as_array().unwrap();
    assert!(recent.len() <= 10);
    assert_eq!(recent[0]["id"], task_id.as_str());
    assert_eq!(recent[0]["department"], "Direct Upload");

    let (status, chart) = get_json(format!("{}/api/v1/dashboard/chart", base)).await;
    assert_eq!(status, StatusCode::OK);
    let chart = chart.as_array().unwrap();
    assert_eq!(chart.len(), 7);
    let uploads: u64 = chart.iter().map(|p| p["uploads"].as_u64().unwrap()).sum();
    assert_eq!(uploads, 820 + 1);
}

#[tokio::test]
async fn reset_requires_key_and_wipes_data() {
    let base = spawn_app(test_settings()).await;
    let task_id = upload_ok(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;

    let (status, _) = get_json(format!("{}/api/v1/admin/reset", base)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = get_json(format!("{}/api/v1/admin/reset?key=wrong", base)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get_json(format!("{}/api/v1/admin/reset?key={}", base, RESET_KEY)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "Backend data wiped."}));

    let (status, _) = get_json(format!("{}/api/v1/scan/result/{}", base, task_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Fingerprints were wiped too, so the same bytes are no longer a duplicate.
    let again = upload_ok(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;
    let (_, result) = get_json(format!("{}/api/v1/scan/result/{}", base, again)).await;
    assert_eq!(result["is_duplicate"], false);
}

#[tokio::test]
async fn reset_is_disabled_without_configured_key() {
    let base = spawn_app(Settings::default()).await;
    let (status, _) = get_json(format!("{}/api/v1/admin/reset?key=", base)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn trigger_alert_without_webhook_is_logged() {
    let base = spawn_app(test_settings()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/v1/admin/trigger-alert", base))
        .json(&json!({"message": "Manual review requested"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "sent"}));
}

#[tokio::test]
async fn trigger_alert_with_unreachable_webhook_is_500() {
    let settings = Settings {
        alert_webhook_url: Some("http://127.0.0.1:9/hook".to_string()),
        ..test_settings()
    };
    let base = spawn_app(settings).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/v1/admin/trigger-alert", base))
        .json(&json!({"message": "Manual review requested"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn failed_index_write_does_not_leave_phantom_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        fingerprint_path: Some(dir.path().to_path_buf()),
        ..test_settings()
    };
    let base = spawn_app(settings).await;

    for _ in 0..2 {
        let response = upload(&base, "invoice.pdf", INVOICE.as_bytes().to_vec()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await.unwrap();
        assert!(body["detail"].as_str().unwrap().starts_with("Index IO error"));
    }
}

async fn health_with_origin(base: &str, origin: &str) -> reqwest::header::HeaderMap {
    let response = reqwest::Client::new()
        .get(format!("{}/health", base))
        .header("Origin", origin)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.headers().clone()
}

#[tokio::test]
async fn cors_allows_only_configured_origins() {
    let base = spawn_app(test_settings()).await;

    let headers = health_with_origin(&base, "http://localhost:3000").await;
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:3000");
    assert_eq!(headers["access-control-allow-credentials"], "true");

    let headers = health_with_origin(&base, "http://evil.example").await;
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn cors_wildcard_allows_any_origin_without_credentials() {
    let settings = Settings {
        cors_origins: vec!["*".to_string()],
        ..test_settings()
    };
    let base = spawn_app(settings).await;

    let headers = health_with_origin(&base, "http://evil.example").await;
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.get("access-control-allow-credentials").is_none());
}
