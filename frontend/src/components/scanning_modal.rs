//! Modal playing the scripted scan timeline.
//!
//! Opening starts the percentage ticker and one timeout per scheduled step
//! event; closing (or unmounting) drops them all and resets the timeline.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

use crate::components::{ProgressBar, ProgressVariant};
use crate::config::PROGRESS_TICK_MS;
use crate::scan::{ScanTimeline, StepStatus};

/// Timers of one run. Dropping this cancels all of them.
struct ScanTimers {
    _ticker: Interval,
    _steps: Vec<Timeout>,
}

fn start_timers(timeline: RwSignal<ScanTimeline>, on_complete: Callback<()>) -> ScanTimers {
    let ticker = Interval::new(PROGRESS_TICK_MS, move || {
        timeline.try_update(|t| {
            t.tick();
        });
    });

    let steps = ScanTimeline::schedule()
        .into_iter()
        .map(|(at, event)| {
            Timeout::new(at, move || match timeline.try_update(|t| t.apply(event)) {
                Some(Ok(true)) => {
                    log::info!("🛡️ Scan animation finished");
                    on_complete.call(());
                }
                Some(Ok(false)) | None => {}
                Some(Err(e)) => log::warn!("⚠️ Scan timeline rejected {:?}: {}", event, e),
            })
        })
        .collect();

    ScanTimers {
        _ticker: ticker,
        _steps: steps,
    }
}

/// Run `handler` only when `is_open` flips, never on unrelated re-runs.
/// The initial closed state is not reported.
pub(crate) fn on_open_change(is_open: Signal<bool>, handler: impl Fn(bool) + 'static) {
    create_effect(move |prev: Option<bool>| {
        let open = is_open.get();
        if prev.unwrap_or(false) != open {
            handler(open);
        }
        open
    });
}

fn step_icon(id: &str) -> &'static str {
    match id {
        "metadata" => "🔎",
        "comparison" => "🗄️",
        "ai" => "🛡️",
        _ => "⚠️",
    }
}

#[component]
pub fn ScanningModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] filename: Signal<String>,
    #[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
    let timeline = create_rw_signal(ScanTimeline::new());
    let timers = store_value(None::<ScanTimers>);

    on_open_change(is_open, move |open| {
        if open {
            let name = filename.get_untracked();
            log::info!("🔬 Scanning {}", name);
            // drop any previous run before restarting
            timers.set_value(None);
            timeline.update(|t| t.open(name));
            timers.set_value(Some(start_timers(timeline, on_complete)));
        } else {
            timers.set_value(None);
            timeline.update(ScanTimeline::close);
        }
    });

    on_cleanup(move || {
        timers.try_update_value(|t| *t = None);
    });

    let percent = Signal::derive(move || f64::from(timeline.with(ScanTimeline::percent)));
    let steps = move || timeline.with(|t| t.steps().to_vec());

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-root">
                <div class="modal-backdrop"></div>
                <div class="modal scanning-modal" role="dialog" aria-modal="true">
                    <div class="scan-line">
                        <div class="scan-line-fill" style=move || format!("width: {}%;", percent.get())></div>
                    </div>
                    <div class="modal-body">
                        <div class="modal-header">
                            <div class="modal-icon">"🛡️"</div>
                            <h2>"Scanning Document"</h2>
                            <p class="muted">
                                "Analyzing " <span class="highlight">{move || filename.get()}</span>
                            </p>
                        </div>

                        <ProgressBar progress=percent variant=ProgressVariant::Primary show_label=true/>

                        <div class="scan-steps">
                            <For
                                each=steps
                                key=|step| (step.id, step.status as u8)
                                children=move |step| {
                                    let icon = match step.status {
                                        StepStatus::Completed => "✓",
                                        StepStatus::InProgress => "⏳",
                                        StepStatus::Pending => step_icon(step.id),
                                    };
                                    view! {
                                        <div class=step.status.css_class()>
                                            <div class="scan-step-icon">{icon}</div>
                                            <div class="scan-step-text">
                                                <p class="scan-step-label">{step.label}</p>
                                                <p class="scan-step-description">{step.description}</p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
