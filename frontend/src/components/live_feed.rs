//! Recent activity list, refreshed every [`FEED_POLL_INTERVAL_MS`].

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::config::FEED_POLL_INTERVAL_MS;
use crate::coordinator::results_url;
use crate::filters::{FilterSelection, SEVERITY_GROUP};
use crate::format::format_time_ago;
use crate::services::get_recent_files;
use crate::types::{AppResult, RecentFile};
use crate::components::StatusBadge;

fn load(files: RwSignal<Option<AppResult<Vec<RecentFile>>>>) {
    spawn_local(async move {
        let result = get_recent_files().await;
        if let Err(e) = &result {
            log::error!("❌ Failed to load recent files: {}", e);
        }
        // the feed may have unmounted while the request was in flight
        let _ = files.try_set(Some(result));
    });
}

#[component]
pub fn LiveFeed(#[prop(into)] selection: Signal<FilterSelection>) -> impl IntoView {
    let files = create_rw_signal(None::<AppResult<Vec<RecentFile>>>);

    load(files);
    let poller = store_value(Some(Interval::new(FEED_POLL_INTERVAL_MS, move || load(files))));
    on_cleanup(move || {
        poller.try_update_value(|p| *p = None);
    });

    let visible = move || {
        files.with(|f| match f {
            Some(Ok(list)) => Some(Ok(selection.with(|s| {
                list.iter()
                    .filter(|file| s.allows(SEVERITY_GROUP, file.status.key()))
                    .cloned()
                    .collect::<Vec<_>>()
            }))),
            Some(Err(e)) => Some(Err(e.clone())),
            None => None,
        })
    };

    view! {
        <div class="panel live-feed">
            <div class="panel-header">
                <div class="panel-title">
                    <h3>"Recent Activity"</h3>
                    <span class="live-pill"><span class="dot"></span>"Live"</span>
                </div>
                <a href="/upload" class="panel-link">"View All →"</a>
            </div>

            {move || match visible() {
                None => (1..=4)
                    .map(|_| view! {
                        <div class="feed-row skeleton">
                            <div class="skeleton-block icon"></div>
                            <div class="skeleton-lines">
                                <div class="skeleton-line wide"></div>
                                <div class="skeleton-line half"></div>
                            </div>
                        </div>
                    })
                    .collect_view(),
                Some(Err(e)) => view! {
                    <div class="error-banner">
                        <p class="strong">"Error loading recent activity"</p>
                        <p>{e.to_string()}</p>
                    </div>
                }
                .into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="empty-state">"No documents match the current filters"</p>
                }
                .into_view(),
                Some(Ok(list)) => {
                    let now = Utc::now();
                    list.into_iter()
                        .map(|file| view! { <FeedRow file=file now=now/> })
                        .collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn FeedRow(file: RecentFile, now: chrono::DateTime<Utc>) -> impl IntoView {
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
                <div class="feed-meta">
                    <span class="truncate">{file.department}</span>
                    <span class="sep">"•"</span>
                    <span>"🕒 " {format_time_ago(file.scanned_at, now)}</span>
                </div>
            </div>
            <div class="feed-score">
                <p class=format!("score {}", style.text_class)>{file.fraud_score}"%"</p>
                <p class="caption">"Risk Score"</p>
            </div>
        </a>
    }
}
