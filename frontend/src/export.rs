//! Dashboard stats export as JSON or CSV.

use crate::types::{AppError, AppResult, DashboardStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "Export as JSON",
            ExportFormat::Csv => "Export as CSV",
        }
    }
}

/// `{base}.{extension}`
pub fn export_filename(base: &str, format: ExportFormat) -> String {
    format!("{}.{}", base, format.extension())
}

/// Render the stats in `format`. CSV is a header row and one value row;
/// a missing accuracy leaves its cell empty.
pub fn render_stats(stats: &DashboardStats, format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(stats).map_err(|e| AppError::Decode(e.to_string()))
        }
        ExportFormat::Csv => {
            let accuracy = stats.accuracy_rate.map(|a| a.to_string()).unwrap_or_default();
            Ok(format!(
                "total_scanned,fraud_detected,total_savings,pending_review,accuracy_rate\n{},{},{},{},{}\n",
                stats.total_scanned,
                stats.fraud_detected,
                stats.total_savings,
                stats.pending_review,
                accuracy
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DashboardStats {
        DashboardStats {
            total_scanned: 14205,
            fraud_detected: 45,
            total_savings: 12_000_000.0,
            pending_review: 18,
            accuracy_rate: Some(99.7),
        }
    }

    #[test]
    fn test_csv_has_header_and_values() {
        let csv = render_stats(&stats(), ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("total_scanned,"));
        assert_eq!(lines[1], "14205,45,12000000,18,99.7");
    }

    #[test]
    fn test_csv_leaves_missing_accuracy_empty() {
        let csv = render_stats(&DashboardStats::default(), ExportFormat::Csv).unwrap();
        assert!(csv.ends_with("0,0,0,0,\n"));
    }

    #[test]
    fn test_json_parses_back() {
        let json = render_stats(&stats(), ExportFormat::Json).unwrap();
        let parsed: DashboardStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats());
    }

    #[test]
    fn test_filename() {
        assert_eq!(export_filename("dashboard-stats", ExportFormat::Csv), "dashboard-stats.csv");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }
}
