use leptos::*;

use crate::chart::{layout, ChartLayout, VIEW_HEIGHT, VIEW_WIDTH};
use crate::services::get_chart_data;

#[component]
pub fn DashboardChart() -> impl IntoView {
    let data = create_local_resource(|| (), |_| async move { get_chart_data().await });

    view! {
        <div class="panel chart-panel">
            <div class="panel-header">
                <div>
                    <h3>"Document Analysis Overview"</h3>
                    <p class="muted">"Uploads vs Fraud Detection - Last 7 Days"</p>
                </div>
                <div class="chart-legend">
                    <span><i class="swatch swatch-uploads"></i>"Uploads"</span>
                    <span><i class="swatch swatch-fraud"></i>"Fraud Detected"</span>
                </div>
            </div>

            {move || match data.get() {
                None => view! {
                    <div class="chart-loading">
                        <div class="spinner"></div>
                        <p class="muted">"Loading chart data..."</p>
                    </div>
                }
                .into_view(),
                Some(Err(e)) => {
                    log::error!("❌ Failed to load chart data: {}", e);
                    view! {
                        <div class="error-banner">
                            <p class="strong">"Error loading chart"</p>
                            <p>{e.to_string()}</p>
                        </div>
                    }
                    .into_view()
                }
                Some(Ok(points)) => view! { <BarChart layout=layout(&points)/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn BarChart(layout: ChartLayout) -> impl IntoView {
    let ChartLayout { groups, left_ticks, right_ticks, baseline_y } = layout;

    let grid = left_ticks
        .iter()
        .map(|tick| {
            view! {
                <line x1="40" x2={VIEW_WIDTH - 40.0} y1={tick.y} y2={tick.y} class="chart-grid"/>
                <text x="34" y={tick.y + 4.0} text-anchor="end" class="chart-tick">{tick.value}</text>
            }
        })
        .collect_view();

    let right_axis = right_ticks
        .iter()
        .map(|tick| {
            view! {
                <text x={VIEW_WIDTH - 34.0} y={tick.y + 4.0} text-anchor="start" class="chart-tick">{tick.value}</text>
            }
        })
        .collect_view();

    let bars = groups
        .into_iter()
        .map(|g| {
            view! {
                <g>
                    <rect
                        x={g.uploads.x}
                        y={g.uploads.y}
                        width={g.uploads.width}
                        height={g.uploads.height}
                        rx="2"
                        class="bar-uploads"
                    />
                    <rect
                        x={g.fraud.x}
                        y={g.fraud.y}
                        width={g.fraud.width}
                        height={g.fraud.height}
                        rx="2"
                        class="bar-fraud"
                    />
                    <text x={g.label_x} y={baseline_y + 18.0} text-anchor="middle" class="chart-tick">{g.label}</text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="bar-chart" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) preserveAspectRatio="none">
            {grid}
            {right_axis}
            {bars}
        </svg>
    }
}
