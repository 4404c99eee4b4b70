use chrono::Utc;
use leptos::*;
use leptos_router::use_query_map;

use crate::components::StatusBadge;
use crate::coordinator::results_url;
use crate::filters::matches_query;
use crate::format::format_time_ago;
use crate::services::get_recent_files;

/// Client-side search over the recent files list.
#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = move || query_map.with(|q| q.get("q").cloned().unwrap_or_default());
    let files = create_local_resource(|| (), |_| async move { get_recent_files().await });

    view! {
        <div class="page search-page">
            <nav class="breadcrumbs"><a href="/">"Dashboard"</a>" / "<span>"Search"</span></nav>
            <h1>"Search Results"</h1>
            <p class="muted">{move || format!("Results for \"{}\"", query())}</p>

            {move || match files.get() {
                None => view! { <div class="panel"><div class="spinner"></div></div> }.into_view(),
                Some(Err(e)) => {
                    log::error!("❌ Search failed: {}", e);
                    view! {
                        <div class="error-banner">
                            <p class="strong">"Error loading documents"</p>
                            <p>{e.to_string()}</p>
                        </div>
                    }
                    .into_view()
                }
                Some(Ok(list)) => {
                    let q = query();
                    let now = Utc::now();
                    let hits: Vec<_> = list.into_iter().filter(|f| matches_query(f, &q)).collect();
                    if hits.is_empty() {
                        return view! { <p class="empty-state">"No documents found"</p> }.into_view();
                    }
                    hits.into_iter()
                        .map(|file| {
                            let style = file.status.style();
                            let href = results_url(Some(&String::from(js_sys::encode_uri_component(&file.id))));
                            view! {
                                <a href=href class="feed-row">
                                    <div class=format!("feed-icon {}", style.surface_class)>"📄"</div>
                                    <div class="feed-main">
                                        <div class="feed-title">
                                            <p class="truncate">{file.filename}</p>
                                            <StatusBadge severity=file.status small=true/>
                                        </div>
                                        <p class="caption">{file.department} " • " {format_time_ago(file.scanned_at, now)}</p>
                                    </div>
                                    <div class="feed-score">
                                        <p class=format!("score {}", style.text_class)>{file.fraud_score}"%"</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}
