//! Demo baseline for the dashboard.
//!
//! The dashboard reads start from these fixtures and add whatever was
//! scanned live. Demo files carry synthesized results so the feed's links
//! resolve on the results page.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::models::{Anomaly, ChartDataPoint, DashboardStats, RecentFile, ScanResult, Severity};
use crate::store::Tally;

pub const BASELINE_SCANNED: u64 = 14_205;
pub const BASELINE_FRAUD: u64 = 45;
/// 1.2 crore rupees
pub const BASELINE_SAVINGS: f64 = 12_000_000.0;
pub const BASELINE_PENDING: u64 = 18;
pub const ACCURACY_RATE: f64 = 99.7;

/// Monday first: (label, uploads, fraud)
const WEEKLY_ACTIVITY: [(&str, u32, u32); 7] = [
    ("Mon", 120, 2),
    ("Tue", 150, 5),
    ("Wed", 180, 1),
    ("Thu", 90, 0),
    ("Fri", 200, 8),
    ("Sat", 50, 0),
    ("Sun", 30, 0),
];

struct DemoFile {
    id: &'static str,
    filename: &'static str,
    department: &'static str,
    fraud_score: u8,
    minutes_ago: i64,
    duplicate_of: Option<&'static str>,
    anomalies: &'static [(&'static str, &'static str, f64)],
}

const DEMO_FILES: [DemoFile; 6] = [
    DemoFile {
        id: "demo-5521",
        filename: "Invoice_Treasury_2024_5521.pdf",
        department: "Treasury Department",
        fraud_score: 92,
        minutes_ago: 5,
        duplicate_of: Some("demo-3310"),
        anomalies: &[
            ("Duplicate Discovery", "Invoice #INV-2024-5521 matches an existing record from March 2024.", 0.97),
            ("Metadata Fraud", "METADATA_MISMATCH: Hidden year is later than document year", 0.78),
        ],
    },
    DemoFile {
        id: "demo-1102",
        filename: "Contract_PWD_Tender_1102.pdf",
        department: "Public Works",
        fraud_score: 58,
        minutes_ago: 23,
        duplicate_of: None,
        anomalies: &[("Forensic Tampering", "Pixel alteration detected around the signature block.", 0.64)],
    },
    DemoFile {
        id: "demo-8834",
        filename: "Receipt_Health_Services_8834.pdf",
        department: "Health Services",
        fraud_score: 12,
        minutes_ago: 60,
        duplicate_of: None,
        anomalies: &[],
    },
    DemoFile {
        id: "demo-2210",
        filename: "Bill_Education_Board_2210.pdf",
        department: "Education Board",
        fraud_score: 8,
        minutes_ago: 120,
        duplicate_of: None,
        anomalies: &[],
    },
    DemoFile {
        id: "demo-7745",
        filename: "Vendor_Agreement_Irrigation_7745.docx",
        department: "Irrigation Department",
        fraud_score: 76,
        minutes_ago: 185,
        duplicate_of: None,
        anomalies: &[("Metadata Fraud", "SUSPICIOUS_CREATOR_TOOL: Canva", 0.85)],
    },
    DemoFile {
        id: "demo-4418",
        filename: "Salary_Statement_Revenue_4418.pdf",
        department: "Revenue Department",
        fraud_score: 20,
        minutes_ago: 320,
        duplicate_of: None,
        anomalies: &[("PII Detected", "Contains: PAN_DETECTED", 0.75)],
    },
];

/// Baseline counts plus the live tally.
///
/// Critical live scans count as fraud, warnings as pending review.
pub fn dashboard_stats(live: Tally) -> DashboardStats {
    DashboardStats {
        total_scanned: BASELINE_SCANNED + live.total,
        fraud_detected: BASELINE_FRAUD + live.critical,
        total_savings: BASELINE_SAVINGS,
        pending_review: BASELINE_PENDING + live.warning,
        accuracy_rate: Some(ACCURACY_RATE),
    }
}

/// Weekly series, Monday first, with live activity added to its weekday.
pub fn chart_series(activity: &[(DateTime<Utc>, Severity)]) -> Vec<ChartDataPoint> {
    WEEKLY_ACTIVITY
        .iter()
        .enumerate()
        .map(|(day, &(label, uploads, fraud))| {
            let (live_uploads, live_fraud) = activity
                .iter()
                .filter(|(at, _)| at.weekday().num_days_from_monday() as usize == day)
                .fold((0u32, 0u32), |(u, f), (_, severity)| {
                    (u + 1, f + u32::from(*severity == Severity::Critical))
                });
            ChartDataPoint {
                date: label.to_string(),
                uploads: uploads + live_uploads,
                fraud: fraud + live_fraud,
            }
        })
        .collect()
}

/// Start of the chart window: seven days back from `now`.
pub fn chart_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(7)
}

pub fn recent_files(now: DateTime<Utc>) -> Vec<RecentFile> {
    DEMO_FILES
        .iter()
        .map(|f| RecentFile {
            id: f.id.to_string(),
            filename: f.filename.to_string(),
            department: f.department.to_string(),
            status: Severity::from_score(f.fraud_score),
            fraud_score: f.fraud_score,
            scanned_at: now - Duration::minutes(f.minutes_ago),
        })
        .collect()
}

/// Synthesized result of a demo file.
pub fn result(id: &str, now: DateTime<Utc>) -> Option<ScanResult> {
    let file = DEMO_FILES.iter().find(|f| f.id == id)?;
    let anomalies: Vec<Anomaly> = file
        .anomalies
        .iter()
        .map(|&(kind, description, confidence)| Anomaly::new(kind, description, confidence))
        .collect();
    let confidence = if anomalies.is_empty() {
        0.0
    } else {
        anomalies.iter().map(|a| a.confidence).sum::<f64>() / anomalies.len() as f64
    };

    Some(ScanResult {
        file_id: file.id.to_string(),
        filename: file.filename.to_string(),
        fraud_score: file.fraud_score,
        severity: Severity::from_score(file.fraud_score),
        is_duplicate: file.duplicate_of.is_some(),
        duplicate_source_id: file.duplicate_of.map(str::to_string),
        anomalies,
        text_content: String::new(),
        processing_time: 1_200 + u64::from(file.fraud_score) * 10,
        confidence: (confidence * 10_000.0).round() / 10_000.0,
        status: crate::analysis::COMPLETED.to_string(),
        scanned_at: now - Duration::minutes(file.minutes_ago),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stats_add_live_tally() {
        let stats = dashboard_stats(Tally::default());
        assert_eq!(stats.total_scanned, BASELINE_SCANNED);
        assert_eq!(stats.accuracy_rate, Some(ACCURACY_RATE));

        let stats = dashboard_stats(Tally { total: 3, critical: 1, warning: 1 });
        assert_eq!(stats.total_scanned, BASELINE_SCANNED + 3);
        assert_eq!(stats.fraud_detected, BASELINE_FRAUD + 1);
        assert_eq!(stats.pending_review, BASELINE_PENDING + 1);
    }

    #[test]
    fn test_chart_series_adds_live_activity() {
        // 2024-03-06 is a Wednesday
        let wednesday = Utc.with_ymd_and_hms(2024, 3, 6, 10, 0, 0).unwrap();
        let series = chart_series(&[(wednesday, Severity::Critical), (wednesday, Severity::Safe)]);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, "Mon");
        assert_eq!(series[2], ChartDataPoint { date: "Wed".into(), uploads: 182, fraud: 2 });
        assert_eq!(series[4], ChartDataPoint { date: "Fri".into(), uploads: 200, fraud: 8 });
    }

    #[test]
    fn test_recent_files_are_newest_first() {
        let now = Utc::now();
        let files = recent_files(now);
        assert!(files.windows(2).all(|w| w[0].scanned_at >= w[1].scanned_at));
        assert_eq!(files[0].status, Severity::Critical);
    }

    #[test]
    fn test_every_demo_file_has_a_result() {
        let now = Utc::now();
        for file in recent_files(now) {
            let result = result(&file.id, now).unwrap();
            assert_eq!(result.fraud_score, file.fraud_score);
            assert_eq!(result.severity, file.status);
        }
        assert!(result("missing", now).is_none());
    }

    #[test]
    fn test_duplicate_demo_result() {
        let result = result("demo-5521", Utc::now()).unwrap();
        assert!(result.is_duplicate);
        assert_eq!(result.duplicate_source_id.as_deref(), Some("demo-3310"));
        assert_eq!(result.confidence, 0.875);
    }
}
