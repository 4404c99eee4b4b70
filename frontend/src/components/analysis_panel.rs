//! Verdict panel of the results page.

use leptos::*;

use crate::components::FraudGauge;
use crate::format::{format_seconds, short_id};
use crate::status::Severity;
use crate::types::{Anomaly, ScanResult};

#[component]
fn AnomalyCard(anomaly: Anomaly, index: usize) -> impl IntoView {
    view! {
        <div class="anomaly-card" style=format!("animation-delay: {}ms;", index * 100)>
            <span class="anomaly-icon">"⚠️"</span>
            <div class="anomaly-body">
                <div class="anomaly-title">
                    <h4>{anomaly.kind}</h4>
                    <span class="anomaly-confidence">
                        {format!("{}% confidence", (anomaly.confidence * 100.0).round())}
                    </span>
                </div>
                <p>{anomaly.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn AnalysisPanel(
    result: ScanResult,
    #[prop(into)] on_approve: Callback<()>,
    #[prop(into)] on_reject: Callback<()>,
) -> impl IntoView {
    let style = result.severity.style();
    let banner_icon = if result.severity == Severity::Safe { "✅" } else { "🛡️" };
    let scanned = result.scanned_at.format("%d %b %Y, %H:%M UTC").to_string();
    let anomaly_count = result.anomalies.len();

    let anomalies = if result.anomalies.is_empty() {
        view! {
            <div class="no-anomalies">
                <div class="no-anomalies-icon">"✓"</div>
                <p class="strong">"No Anomalies Detected"</p>
                <p class="muted">"This document passed all validation checks"</p>
            </div>
        }
        .into_view()
    } else {
        result
            .anomalies
            .into_iter()
            .enumerate()
            .map(|(index, anomaly)| view! { <AnomalyCard anomaly=anomaly index=index/> })
            .collect_view()
    };

    let duplicate = result.is_duplicate.then(|| {
        let source = result
            .duplicate_source_id
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        view! {
            <div class="duplicate-warning">
                <h4>"⚠️ Duplicate Document Detected"</h4>
                <p>"This document appears to be a duplicate of an existing record in the database."</p>
                <div class="duplicate-source">
                    <p class="caption">"Original Document Reference:"</p>
                    <code>{source}</code>
                </div>
            </div>
        }
    });

    view! {
        <div class="analysis-panel">
            <div class="analysis-header">
                <p class="muted">"🕒 Scanned " {scanned}</p>
                <h2>{result.filename}</h2>
                <p class="muted" title=result.file_id.clone()>"ID: " {short_id(&result.file_id)}</p>
            </div>

            <div class="panel gauge-panel">
                <FraudGauge score=result.fraud_score/>
            </div>

            <div class=style.banner_class>
                <span>{banner_icon}</span>
                <span>{format!("{} RISK", result.severity)}</span>
            </div>

            {duplicate}

            <div class="anomalies">
                <h3>"⚠️ Detected Anomalies (" {anomaly_count} ")"</h3>
                {anomalies}
            </div>

            <div class="panel processing-details">
                <h4>"Processing Details"</h4>
                <dl>
                    <div><dt>"Processing Time"</dt><dd>{format_seconds(result.processing_time)}</dd></div>
                    <div><dt>"Confidence"</dt><dd>{format!("{:.0}%", result.confidence * 100.0)}</dd></div>
                    <div><dt>"Database Compared"</dt><dd>"70 TB"</dd></div>
                    <div><dt>"AI Model Version"</dt><dd>"v2.4.1"</dd></div>
                </dl>
            </div>

            <div class="analysis-actions">
                <button class="btn btn-primary" on:click=move |_| on_approve.call(())>"✓ Approve Document"</button>
                <button class="btn btn-danger" on:click=move |_| on_reject.call(())>"✕ Reject & Flag"</button>
            </div>
        </div>
    }
}
