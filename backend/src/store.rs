//! In-memory store of scan results, keyed by task identifier.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::{RecentFile, ScanResult, Severity};

/// Live counts added on top of the demo baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: u64,
    pub critical: u64,
    pub warning: u64,
}

#[derive(Debug, Default)]
struct Inner {
    /// Task ids in insertion order
    order: Vec<String>,
    results: HashMap<String, ScanResult>,
}

/// Thread-safe, insertion-ordered result store.
#[derive(Debug, Default)]
pub struct ScanStore {
    inner: RwLock<Inner>,
}

impl ScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing any previous one with the same id.
    pub fn insert(&self, result: ScanResult) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !inner.results.contains_key(&result.file_id) {
            inner.order.push(result.file_id.clone());
        }
        inner.results.insert(result.file_id.clone(), result);
    }

    pub fn get(&self, task_id: &str) -> Option<ScanResult> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.results.get(task_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<RecentFile> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .rev()
            .filter_map(|id| inner.results.get(id))
            .take(limit)
            .map(RecentFile::from)
            .collect()
    }

    pub fn tally(&self) -> Tally {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.results.values().fold(Tally::default(), |mut t, r| {
            t.total += 1;
            match r.severity {
                Severity::Critical => t.critical += 1,
                Severity::Warning => t.warning += 1,
                Severity::Safe => {}
            }
            t
        })
    }

    /// Scan time and severity of every result since `since`.
    pub fn activity_since(&self, since: DateTime<Utc>) -> Vec<(DateTime<Utc>, Severity)> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .results
            .values()
            .filter(|r| r.scanned_at >= since)
            .map(|r| (r.scanned_at, r.severity))
            .collect()
    }

    /// Remove every result, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = inner.order.len();
        inner.order.clear();
        inner.results.clear();
        dropped
    }
}
