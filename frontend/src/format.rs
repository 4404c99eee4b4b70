//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Group digits the Indian way: last three, then pairs (`12,34,567`).
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount rounded to whole rupees.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, format_number(rounded.abs() as u64))
}

/// Relative age of a timestamp, e.g. "5 min ago" or "2 days ago".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }
    format!("{} day{} ago", hours / 24, if hours >= 48 { "s" } else { "" })
}

/// Milliseconds as seconds with two decimals ("1.25s").
pub fn format_seconds(ms: u64) -> String {
    format!("{:.2}s", ms as f64 / 1000.0)
}

/// First eight characters of an identifier followed by an ellipsis.
pub fn short_id(id: &str) -> String {
    match id.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_string(),
    }
}

/// Percentage with at most one decimal, trailing ".0" dropped.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{:.1}%", rounded)
    }
}
