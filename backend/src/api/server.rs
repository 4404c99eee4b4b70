//! HTTP Server for the FraudShield API.
//!
//! # API Endpoints
//!
//! | Method | Path                            | Description                          |
//! |--------|---------------------------------|--------------------------------------|
//! | GET    | `/health`, `/api/v1/health`     | Health check                         |
//! | GET    | `/api/v1/dashboard/stats`       | Aggregate counts                     |
//! | GET    | `/api/v1/dashboard/chart`       | Weekly uploads vs fraud              |
//! | GET    | `/api/v1/files/recent`          | Recently scanned files               |
//! | POST   | `/api/v1/scan/upload`           | Upload and scan a document           |
//! | GET    | `/api/v1/scan/result/{task_id}` | Verdict of one scan                  |
//! | GET    | `/api/v1/admin/reset?key=`      | Wipe results and fingerprints        |
//! | POST   | `/api/v1/admin/trigger-alert`   | Forward a manual alert               |

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::PoisonError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use uuid::Uuid;

use super::state::AppState;
use crate::alerts::critical_message;
use crate::analysis::scan_document;
use crate::config::Settings;
use crate::demo;
use crate::error::{ServerError, ServerResult, UploadError};
use crate::models::{
    AlertRequest, ChartDataPoint, DashboardStats, RecentFile, ScanResult, Severity, StatusResponse,
    UploadResponse,
};
use crate::validation::validate_upload;

/// Longest list served by `/files/recent`.
pub const RECENT_FILES_LIMIT: usize = 10;

/// Room for multipart framing on top of the file size limit.
const BODY_OVERHEAD: usize = 64 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors_origins);
    let body_limit = DefaultBodyLimit::max(state.settings.max_file_size + BODY_OVERHEAD);

    let api = Router::new()
        .route("/health", get(health))
        .route("/dashboard/stats", get(dashboard_stats))
        .route("/dashboard/chart", get(dashboard_chart))
        .route("/files/recent", get(recent_files))
        .route("/scan/upload", post(upload_scan))
        .route("/scan/result/{task_id}", get(scan_result))
        .route("/admin/reset", get(admin_reset))
        .route("/admin/trigger-alert", post(trigger_alert));

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(body_limit)
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured origins. A `*` entry allows any origin without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "⚠️ Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed)).allow_credentials(true)
}

/// Serve on an already bound listener until the process is interrupted.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> ServerResult<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind `0.0.0.0:{port}` and serve.
pub async fn start_server(settings: Settings) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 FraudShield API running on http://localhost:{}", settings.port);
    tracing::info!("   POST /api/v1/scan/upload         - Upload a document");
    tracing::info!("   GET  /api/v1/scan/result/{{id}}    - Scan verdict");
    tracing::info!("   GET  /api/v1/dashboard/stats     - Dashboard counts");
    tracing::info!(origins = ?settings.cors_origins, "   CORS origins");
    if settings.admin_reset_key.is_none() {
        tracing::warn!("⚠️ ADMIN_RESET_KEY not set, admin reset is disabled");
    }

    serve(listener, AppState::new(settings)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("👋 Shutting down");
}

// =============================================================================
// Handlers
// =============================================================================

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(demo::dashboard_stats(state.store.tally()))
}

async fn dashboard_chart(State(state): State<AppState>) -> Json<Vec<ChartDataPoint>> {
    let activity = state.store.activity_since(demo::chart_window_start(Utc::now()));
    Json(demo::chart_series(&activity))
}

/// Live scans first, then the demo files, newest first within each.
async fn recent_files(State(state): State<AppState>) -> Json<Vec<RecentFile>> {
    let mut files = state.store.recent(RECENT_FILES_LIMIT);
    files.extend(demo::recent_files(Utc::now()));
    files.truncate(RECENT_FILES_LIMIT);
    Json(files)
}

async fn upload_scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<UploadResponse>> {
    let limit_mb = state.settings.max_file_size_mb();
    let read_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge { limit_mb }
        } else {
            UploadError::Multipart(e.body_text())
        }
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() == Some("file") {
            let name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(read_error)?;
            upload = Some((name, bytes));
        }
    }

    let (name, bytes) = upload.ok_or(UploadError::MissingFilename)?;
    let filename = validate_upload(name.as_deref(), &bytes, state.settings.max_file_size)?.to_string();
    let task_id = Uuid::new_v4().to_string();

    tracing::info!(task_id = %task_id, filename = %filename, bytes = bytes.len(), "📄 New upload");

    let index = state.index.clone();
    let id = task_id.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut index = index.lock().unwrap_or_else(PoisonError::into_inner);
        scan_document(&id, &filename, &bytes, &mut index)
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))??;

    log_verdict(&result);
    if result.severity == Severity::Critical && state.alerts.has_webhook() {
        let alerts = state.alerts.clone();
        let message = critical_message(&result);
        tokio::spawn(async move {
            if let Err(e) = alerts.send(&message).await {
                tracing::error!("❌ Failed to dispatch critical alert: {}", e);
            }
        });
    }

    state.store.insert(result);
    Ok(Json(UploadResponse::concluded(task_id)))
}

fn log_verdict(result: &ScanResult) {
    tracing::info!(
        task_id = %result.file_id,
        score = result.fraud_score,
        severity = %result.severity,
        anomalies = result.anomalies.len(),
        ms = result.processing_time,
        "📊 Verdict"
    );
    if let Some(source) = &result.duplicate_source_id {
        tracing::warn!(task_id = %result.file_id, source = %source, "🔁 Duplicate upload");
    }
}

async fn scan_result(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ServerResult<Json<ScanResult>> {
    state
        .store
        .get(&task_id)
        .or_else(|| demo::result(&task_id, Utc::now()))
        .map(Json)
        .ok_or(ServerError::NotFound(task_id))
}

#[derive(Debug, Deserialize)]
struct ResetQuery {
    key: Option<String>,
}

async fn admin_reset(
    State(state): State<AppState>,
    Query(query): Query<ResetQuery>,
) -> ServerResult<Json<StatusResponse>> {
    let authorized = matches!(
        (&state.settings.admin_reset_key, &query.key),
        (Some(expected), Some(given)) if expected == given
    );
    if !authorized {
        return Err(ServerError::Unauthorized);
    }

    let index = state.index.clone();
    let fingerprints = tokio::task::spawn_blocking(move || {
        let mut index = index.lock().unwrap_or_else(PoisonError::into_inner);
        let count = index.len();
        index.clear().map(|()| count)
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))??;
    let results = state.store.clear();
    tracing::warn!(results, fingerprints, "🧹 Backend data wiped");

    Ok(Json(StatusResponse::new("success").with_message("Backend data wiped.")))
}

async fn trigger_alert(
    State(state): State<AppState>,
    Json(request): Json<AlertRequest>,
) -> ServerResult<Json<StatusResponse>> {
    state.alerts.send(&request.message).await?;
    Ok(Json(StatusResponse::new("sent")))
}
