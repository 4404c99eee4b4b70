//! Severity classification and its presentation table.
//!
//! Every component that colors something by risk goes through
//! [`Severity::style`] instead of matching on strings locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display classification of a fraud score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "SAFE", alias = "safe", alias = "Safe")]
    Safe,
    #[serde(rename = "WARNING", alias = "warning", alias = "Warning")]
    Warning,
    #[serde(rename = "CRITICAL", alias = "critical", alias = "Critical")]
    Critical,
}

/// Presentation attributes for one severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusStyle {
    /// Human label ("Safe", "Warning", "Critical").
    pub label: &'static str,
    /// Small pill next to a filename.
    pub badge_class: &'static str,
    /// Foreground color for scores.
    pub text_class: &'static str,
    /// Icon tile background + border.
    pub surface_class: &'static str,
    /// Full-width verdict banner on the results page.
    pub banner_class: &'static str,
    /// Stroke color used by the gauge.
    pub stroke: &'static str,
}

const SAFE_STYLE: StatusStyle = StatusStyle {
    label: "Safe",
    badge_class: "badge badge-safe",
    text_class: "text-safe",
    surface_class: "surface-safe",
    banner_class: "banner banner-safe",
    stroke: "#16a34a",
};

const WARNING_STYLE: StatusStyle = StatusStyle {
    label: "Warning",
    badge_class: "badge badge-warning",
    text_class: "text-warning",
    surface_class: "surface-warning",
    banner_class: "banner banner-warning",
    stroke: "#d97706",
};

const CRITICAL_STYLE: StatusStyle = StatusStyle {
    label: "Critical",
    badge_class: "badge badge-critical",
    text_class: "text-critical",
    surface_class: "surface-critical",
    banner_class: "banner banner-critical",
    stroke: "#dc2626",
};

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Safe, Severity::Warning, Severity::Critical];

    /// Classify a 0-100 fraud score.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Severity::Critical
        } else if score >= 30 {
            Severity::Warning
        } else {
            Severity::Safe
        }
    }

    pub fn style(self) -> &'static StatusStyle {
        match self {
            Severity::Safe => &SAFE_STYLE,
            Severity::Warning => &WARNING_STYLE,
            Severity::Critical => &CRITICAL_STYLE,
        }
    }

    /// Lowercase key used by filter panels and query strings.
    pub fn key(self) -> &'static str {
        match self {
            Severity::Safe => "safe",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Safe => write!(f, "SAFE"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(Severity::from_score(0), Severity::Safe);
        assert_eq!(Severity::from_score(29), Severity::Safe);
        assert_eq!(Severity::from_score(30), Severity::Warning);
        assert_eq!(Severity::from_score(69), Severity::Warning);
        assert_eq!(Severity::from_score(70), Severity::Critical);
        assert_eq!(Severity::from_score(100), Severity::Critical);
    }

    #[test]
    fn test_accepts_both_casings() {
        let upper: Severity = serde_json::from_str("\"CRITICAL\"").unwrap();
        let lower: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(upper, Severity::Critical);
        assert_eq!(lower, Severity::Warning);
        assert_eq!(serde_json::to_string(&Severity::Safe).unwrap(), "\"SAFE\"");
    }

    #[test]
    fn test_every_severity_has_distinct_style() {
        let labels: Vec<_> = Severity::ALL.iter().map(|s| s.style().label).collect();
        assert_eq!(labels, vec!["Safe", "Warning", "Critical"]);
        assert_ne!(Severity::Safe.style().badge_class, Severity::Critical.style().badge_class);
    }
}
