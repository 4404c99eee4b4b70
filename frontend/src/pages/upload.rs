//! Upload page: runs the [`UploadCoordinator`] against real timers, the
//! XHR transport and the router.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_navigate;
use web_sys::File;

use crate::components::{DropZone, ProgressBar, ProgressVariant, ScanningModal};
use crate::config::RECENT_UPLOADS_SHOWN;
use crate::coordinator::{results_url, Effect, UploadCoordinator, UploadEvent};
use crate::notify::{use_notifier, Notifier};
use crate::services::upload_document;
use crate::session::UploadPhase;
use crate::status::Severity;

/// Carries out the coordinator's effects. Copy, so timers and async
/// tasks can hold it and feed events back.
#[derive(Clone, Copy)]
struct UploadDriver {
    coordinator: RwSignal<UploadCoordinator>,
    file: StoredValue<Option<File>>,
    timers: StoredValue<Vec<Timeout>>,
    navigate: StoredValue<Rc<dyn Fn(&str)>>,
    notifier: Notifier,
}

impl UploadDriver {
    fn dispatch(self, event: UploadEvent) {
        let label = format!("{:?}", event);
        match self.coordinator.try_update(|c| c.dispatch(event)) {
            None => {}
            Some(Ok(effects)) => effects.into_iter().for_each(|effect| self.run(effect)),
            Some(Err(e)) => log::warn!("⚠️ Ignored {}: {}", label, e),
        }
    }

    fn select(self, file: File) {
        if self.coordinator.with_untracked(|c| c.phase() != UploadPhase::Idle) {
            log::warn!("⚠️ Ignoring {} while another document is in flight", file.name());
            return;
        }
        let event = UploadEvent::FileSelected {
            name: file.name(),
            size: file.size() as u64,
        };
        self.file.set_value(Some(file));
        self.dispatch(event);
    }

    fn schedule(self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, callback);
        self.timers.update_value(|timers| timers.push(timeout));
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::StartUpload => {
                let Some(file) = self.file.get_value() else {
                    log::error!("❌ Upload requested without a selected file");
                    return;
                };
                spawn_local(async move {
                    let outcome = upload_document(file, move |percent| {
                        self.dispatch(UploadEvent::Progress(percent))
                    })
                    .await;
                    match outcome {
                        Ok(response) => self.dispatch(UploadEvent::UploadSucceeded {
                            task_id: response.task_id,
                        }),
                        Err(e) => self.dispatch(UploadEvent::TransportFailed { reason: e.to_string() }),
                    }
                });
            }
            Effect::Notify(request) => {
                self.notifier.notify(request);
            }
            Effect::Schedule { delay_ms, event } => {
                self.schedule(delay_ms, move || self.dispatch(event));
            }
            Effect::NavigateToResults { task_id, delay_ms } => {
                let encoded = task_id.map(|id| String::from(js_sys::encode_uri_component(&id)));
                let url = results_url(encoded.as_deref());
                self.schedule(delay_ms, move || {
                    log::info!("➡️ Opening {}", url);
                    self.navigate.with_value(|navigate| (**navigate)(&url));
                });
            }
            // consumed by the coordinator
            Effect::ResetSession => {}
        }
    }
}

/// Modal inputs as memos, so listeners only wake when the value changes
/// and not on every progress write to the coordinator.
fn scan_modal_state(coordinator: RwSignal<UploadCoordinator>) -> (Memo<bool>, Memo<String>) {
    let open = create_memo(move |_| coordinator.with(UploadCoordinator::shows_scan_modal));
    let filename = create_memo(move |_| coordinator.with(|c| c.session().file_name().to_string()));
    (open, filename)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let navigate = use_navigate();
    let navigate: Rc<dyn Fn(&str)> = Rc::new(move |url: &str| navigate(url, Default::default()));

    let driver = UploadDriver {
        coordinator: create_rw_signal(UploadCoordinator::new()),
        file: store_value(None),
        timers: store_value(Vec::new()),
        navigate: store_value(navigate),
        notifier: use_notifier(),
    };
    let coordinator = driver.coordinator;

    on_cleanup(move || {
        driver.timers.try_update_value(|timers| timers.clear());
        let _ = driver.coordinator.try_update(|c| c.dispatch(UploadEvent::Reset));
    });

    let phase = move || coordinator.with(UploadCoordinator::phase);
    let progress = Signal::derive(move || coordinator.with(|c| c.session().progress()));
    let busy = Signal::derive(move || coordinator.with(|c| c.session().is_busy() || c.shows_scan_modal()));
    let (modal_open, filename) = scan_modal_state(coordinator);
    let show_progress = move || matches!(phase(), UploadPhase::Uploading | UploadPhase::Uploaded);

    view! {
        <div class="page upload-page">
            <nav class="breadcrumbs"><a href="/">"Dashboard"</a>" / "<span>"Upload Documents"</span></nav>

            <Show when=show_progress>
                <div class="panel upload-progress">
                    <div class="upload-progress-row">
                        <span>
                            {move || if phase() == UploadPhase::Uploading {
                                "● Uploading file..."
                            } else {
                                "✓ Upload complete!"
                            }}
                        </span>
                        <span class="strong">{move || format!("{}%", progress.get().round())}</span>
                    </div>
                    <ProgressBar progress=progress variant=ProgressVariant::Success/>
                    <Show when=move || phase() == UploadPhase::Uploaded>
                        <p class="caption">"Preparing document for analysis..."</p>
                    </Show>
                </div>
            </Show>

            <div class="page-hero">
                <div class="hero-icon">"🛡️"</div>
                <h1>"Document Upload"</h1>
                <p class="muted">
                    "Upload invoices, contracts, or any financial documents for AI-powered fraud detection "
                    "and validation against our 70TB database."
                </p>
            </div>

            <DropZone on_select=move |file: File| driver.select(file) disabled=busy/>

            <div class="info-cards">
                <InfoCard icon="🕒" title="Fast Processing" text="Documents are analyzed in under 5 seconds using our AI engine"/>
                <InfoCard icon="✅" title="99.7% Accuracy" text="Our models are trained on millions of verified documents"/>
                <InfoCard icon="⚠️" title="Fraud Detection" text="Detects duplicates, forgeries, and metadata anomalies"/>
            </div>

            <RecentUploads/>

            <ScanningModal
                is_open=modal_open
                filename=filename
                on_complete=move |_: ()| driver.dispatch(UploadEvent::ScanCompleted)
            />
        </div>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="panel info-card">
            <div class="info-icon">{icon}</div>
            <h3>{title}</h3>
            <p class="muted">{text}</p>
        </div>
    }
}

const RECENT_UPLOADS: [(&str, &str, u8); 4] = [
    ("Invoice_Treasury_2024_5521.pdf", "5 min ago", 92),
    ("Contract_PWD_Tender_1102.pdf", "23 min ago", 58),
    ("Receipt_Health_Services_8834.pdf", "1 hour ago", 12),
    ("Bill_Education_Board_2210.pdf", "2 hours ago", 8),
];

#[component]
fn RecentUploads() -> impl IntoView {
    let rows = RECENT_UPLOADS
        .iter()
        .take(RECENT_UPLOADS_SHOWN)
        .map(|&(name, time, score)| {
            let style = Severity::from_score(score).style();
            view! {
                <div class="feed-row">
                    <div class=format!("feed-icon {}", style.surface_class)>"📄"</div>
                    <div class="feed-main">
                        <p class="strong truncate">{name}</p>
                        <p class="caption">{time}</p>
                    </div>
                    <div class="feed-score">
                        <p class=format!("score {}", style.text_class)>{score}"%"</p>
                        <p class="caption">"Risk"</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h3>"Recent Uploads"</h3>
                <a href="/" class="panel-link">"View History"</a>
            </div>
            {rows}
        </div>
    }
}
