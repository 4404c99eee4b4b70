use leptos::*;

use crate::status::Severity;

const RADIUS: f64 = 70.0;

/// Circular score gauge; the arc length is proportional to the score.
#[component]
pub fn FraudGauge(score: u8) -> impl IntoView {
    let score = score.min(100);
    let severity = Severity::from_score(score);
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = circumference * (1.0 - f64::from(score) / 100.0);

    view! {
        <div class="gauge">
            <svg viewBox="0 0 180 180" class="gauge-svg">
                <circle cx="90" cy="90" r=RADIUS class="gauge-track" fill="none" stroke-width="12"/>
                <circle
                    cx="90"
                    cy="90"
                    r=RADIUS
                    fill="none"
                    stroke=severity.style().stroke
                    stroke-width="12"
                    stroke-linecap="round"
                    stroke-dasharray=format!("{:.2}", circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform="rotate(-90 90 90)"
                />
            </svg>
            <div class="gauge-center">
                <span class=format!("gauge-score {}", severity.style().text_class)>{score}"%"</span>
                <span class="gauge-caption">"Fraud Score"</span>
            </div>
        </div>
    }
}
