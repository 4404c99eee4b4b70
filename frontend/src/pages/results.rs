use leptos::*;
use leptos_router::use_query_map;

use crate::components::AnalysisPanel;
use crate::notify::{use_notifier, ToastRequest};
use crate::services::get_scan_result;
use crate::types::{AppError, ScanResult};

/// Normalize the `taskId` query value; blank counts as absent.
pub fn task_id_param(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|id| !id.is_empty()).map(str::to_string)
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let query = use_query_map();
    let task_id = move || query.with(|q| task_id_param(q.get("taskId").map(String::as_str)));

    let result = create_local_resource(task_id, |id| async move {
        match id {
            Some(id) => get_scan_result(&id).await,
            None => Err(AppError::MissingTaskId),
        }
    });

    view! {
        <div class="page results-page">
            <nav class="breadcrumbs"><a href="/">"Dashboard"</a>" / "<span>"Analysis Results"</span></nav>

            {move || match result.get() {
                None => view! {
                    <div class="panel results-loading">
                        <div class="spinner"></div>
                        <p class="muted">"Loading analysis results..."</p>
                    </div>
                }
                .into_view(),
                Some(Err(AppError::MissingTaskId)) => view! {
                    <div class="error-banner">
                        <p class="strong">"No analysis selected"</p>
                        <p>"Upload a document to see its fraud analysis here."</p>
                        <a href="/upload" class="btn btn-primary">"Upload a document"</a>
                    </div>
                }
                .into_view(),
                Some(Err(e)) => {
                    log::error!("❌ Failed to load scan result: {}", e);
                    view! {
                        <div class="error-banner">
                            <p class="strong">"Error loading analysis"</p>
                            <p>{e.to_string()}</p>
                        </div>
                    }
                    .into_view()
                }
                Some(Ok(scan)) => view! { <ResultView scan=scan/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ResultView(scan: ScanResult) -> impl IntoView {
    let notifier = use_notifier();
    let filename = scan.filename.clone();
    let uploaded = scan.scanned_at.format("%d %b %Y").to_string();

    let on_approve = {
        let filename = filename.clone();
        move |_: ()| {
            log::info!("✅ Approved {}", filename);
            notifier.notify(ToastRequest::success(
                "Document Approved",
                format!("{} has been marked as verified.", filename),
            ));
        }
    };
    let on_reject = move |_: ()| {
        log::info!("🚩 Rejected {}", filename);
        notifier.notify(ToastRequest::warning(
            "Document Flagged",
            format!("{} has been rejected and flagged for investigation.", filename),
        ));
    };

    view! {
        <div class="results-layout">
            <div class="panel document-preview">
                <div class="document-icon">"📄"</div>
                <p class="strong">{scan.filename.clone()}</p>
                <p class="caption">"Uploaded " {uploaded}</p>
            </div>
            <AnalysisPanel result=scan on_approve=on_approve on_reject=on_reject/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_param() {
        assert_eq!(task_id_param(Some("abc")), Some("abc".to_string()));
        assert_eq!(task_id_param(Some("  ")), None);
        assert_eq!(task_id_param(Some("")), None);
        assert_eq!(task_id_param(None), None);
    }
}
