//! Geometry of the weekly uploads-vs-fraud bar chart.
//!
//! Uploads and fraud counts differ by two orders of magnitude, so each
//! series gets its own y-scale: uploads on the left axis, fraud on the
//! right. Everything here is in SVG user units.

use crate::types::ChartDataPoint;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;
const BAR_GAP: f64 = 8.0;
const TICK_COUNT: u32 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub label: String,
    /// Center of the group, for the x-axis label.
    pub label_x: f64,
    pub uploads: BarRect,
    pub fraud: BarRect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub groups: Vec<BarGroup>,
    pub left_ticks: Vec<AxisTick>,
    pub right_ticks: Vec<AxisTick>,
    pub baseline_y: f64,
}

/// Smallest "round" number at or above `max`, divisible into the tick count.
fn nice_max(max: u32) -> u32 {
    if max == 0 {
        return TICK_COUNT;
    }
    let mut step = 1u32;
    while step.saturating_mul(TICK_COUNT) < max {
        step = match step.to_string().as_bytes()[0] {
            b'1' => step * 2,
            b'2' => step / 2 * 5,
            _ => step * 2,
        };
    }
    step * TICK_COUNT
}

fn ticks(axis_max: u32, plot_height: f64) -> Vec<AxisTick> {
    (0..=TICK_COUNT)
        .map(|i| {
            let value = axis_max / TICK_COUNT * i;
            AxisTick {
                y: MARGIN_TOP + plot_height - plot_height * i as f64 / TICK_COUNT as f64,
                value,
            }
        })
        .collect()
}

pub fn layout(points: &[ChartDataPoint]) -> ChartLayout {
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline_y = MARGIN_TOP + plot_height;

    let uploads_max = nice_max(points.iter().map(|p| p.uploads).max().unwrap_or(0));
    let fraud_max = nice_max(points.iter().map(|p| p.fraud).max().unwrap_or(0));

    let slot = if points.is_empty() { 0.0 } else { plot_width / points.len() as f64 };
    let bar_width = ((slot - BAR_GAP * 3.0) / 2.0).max(1.0);

    let bar = |x: f64, value: u32, axis_max: u32| {
        let height = plot_height * value as f64 / axis_max as f64;
        BarRect {
            x,
            y: baseline_y - height,
            width: bar_width,
            height,
            value,
        }
    };

    let groups = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let left = MARGIN_LEFT + slot * i as f64 + BAR_GAP;
            BarGroup {
                label: p.date.clone(),
                label_x: MARGIN_LEFT + slot * (i as f64 + 0.5),
                uploads: bar(left, p.uploads, uploads_max),
                fraud: bar(left + bar_width + BAR_GAP, p.fraud, fraud_max),
            }
        })
        .collect();

    ChartLayout {
        groups,
        left_ticks: ticks(uploads_max, plot_height),
        right_ticks: ticks(fraud_max, plot_height),
        baseline_y,
    }
}
