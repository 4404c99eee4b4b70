//! Selection state behind the filter panel.

use std::collections::BTreeMap;

use crate::status::Severity;
use crate::types::RecentFile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Picking a value replaces the previous one; picking it again clears it.
    Single,
    #[default]
    Multiple,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGroup {
    pub id: String,
    pub label: String,
    pub options: Vec<FilterOption>,
    pub mode: SelectionMode,
}

/// Group id of the severity filter used by the dashboard feed.
pub const SEVERITY_GROUP: &str = "severity";

impl FilterGroup {
    /// The "Severity" group offered on the dashboard.
    pub fn severity() -> Self {
        Self {
            id: SEVERITY_GROUP.to_string(),
            label: "Severity".to_string(),
            options: Severity::ALL
                .iter()
                .map(|s| FilterOption::new(s.key(), s.style().label, s.key()))
                .collect(),
            mode: SelectionMode::Multiple,
        }
    }
}

/// Selected values per group id. Groups with nothing selected are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<String, Vec<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, group_id: &str, value: &str, mode: SelectionMode) {
        let current = self.selected.remove(group_id).unwrap_or_default();
        let already = current.iter().any(|v| v == value);

        let next = match mode {
            SelectionMode::Single if already => Vec::new(),
            SelectionMode::Single => vec![value.to_string()],
            SelectionMode::Multiple if already => current.into_iter().filter(|v| v != value).collect(),
            SelectionMode::Multiple => {
                let mut values = current;
                values.push(value.to_string());
                values
            }
        };

        if !next.is_empty() {
            self.selected.insert(group_id.to_string(), next);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, group_id: &str, value: &str) -> bool {
        self.selected
            .get(group_id)
            .map_or(false, |values| values.iter().any(|v| v == value))
    }

    pub fn values(&self, group_id: &str) -> &[String] {
        self.selected.get(group_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of selected values across all groups.
    pub fn active_count(&self) -> usize {
        self.selected.values().map(Vec::len).sum()
    }

    /// A group with no selection lets everything through.
    pub fn allows(&self, group_id: &str, value: &str) -> bool {
        match self.selected.get(group_id) {
            Some(values) => values.iter().any(|v| v == value),
            None => true,
        }
    }
}

/// Case-insensitive match of every query word against filename or department.
pub fn matches_query(file: &RecentFile, query: &str) -> bool {
    let haystack = format!("{} {}", file.filename, file.department).to_lowercase();
    query
        .split_whitespace()
        .all(|word| haystack.contains(&word.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_multiple_toggle_adds_and_removes() {
        let mut sel = FilterSelection::new();
        sel.toggle("severity", "critical", SelectionMode::Multiple);
        sel.toggle("severity", "warning", SelectionMode::Multiple);
        assert_eq!(sel.active_count(), 2);
        assert_eq!(sel.values("severity"), ["critical".to_string(), "warning".to_string()]);

        sel.toggle("severity", "critical", SelectionMode::Multiple);
        assert_eq!(sel.values("severity"), ["warning".to_string()]);
    }

    #[test]
    fn test_single_toggle_replaces_then_clears() {
        let mut sel = FilterSelection::new();
        sel.toggle("dept", "health", SelectionMode::Single);
        sel.toggle("dept", "treasury", SelectionMode::Single);
        assert_eq!(sel.values("dept"), ["treasury".to_string()]);

        sel.toggle("dept", "treasury", SelectionMode::Single);
        assert!(sel.values("dept").is_empty());
        assert_eq!(sel, FilterSelection::new());
    }

    #[test]
    fn test_empty_group_allows_everything() {
        let mut sel = FilterSelection::new();
        assert!(sel.allows(SEVERITY_GROUP, "safe"));

        sel.toggle(SEVERITY_GROUP, "critical", SelectionMode::Multiple);
        assert!(sel.allows(SEVERITY_GROUP, "critical"));
        assert!(!sel.allows(SEVERITY_GROUP, "safe"));
        assert!(sel.allows("other", "anything"));

        sel.clear();
        assert_eq!(sel.active_count(), 0);
        assert!(sel.allows(SEVERITY_GROUP, "safe"));
    }

    #[test]
    fn test_severity_group_options() {
        let group = FilterGroup::severity();
        let values: Vec<_> = group.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["safe", "warning", "critical"]);
    }

    #[test]
    fn test_query_matching() {
        let file = RecentFile {
            id: "1".into(),
            filename: "Invoice_Treasury_2024_5521.pdf".into(),
            department: "Treasury Department".into(),
            status: Severity::Critical,
            fraud_score: 92,
            scanned_at: Utc::now(),
        };
        assert!(matches_query(&file, "invoice"));
        assert!(matches_query(&file, "TREASURY 5521"));
        assert!(!matches_query(&file, "health"));
        assert!(matches_query(&file, "   "));
    }
}
