//! Document analysis pipeline.
//!
//! ```text
//! ┌─────────┐   ┌──────────┐   ┌──────────────────────┐   ┌─────────┐   ┌────────────┐
//! │  bytes  │──▶│   text   │──▶│ metadata · dup · pii │──▶│ scoring │──▶│ ScanResult │
//! └─────────┘   └──────────┘   └──────────────────────┘   └─────────┘   └────────────┘
//! ```
//!
//! Non-duplicate documents are added to the [`FingerprintIndex`] so later
//! uploads are compared against them.

pub mod metadata;
pub mod pii;
pub mod scoring;
pub mod text;

use chrono::Utc;
use std::time::Instant;

use crate::dedup::{Fingerprint, FingerprintIndex};
use crate::error::IndexResult;
use crate::models::ScanResult;
use crate::validation::is_pdf;

pub use metadata::{analyze_metadata, MetadataFinding};
pub use pii::{detect_pii, PiiFindings, PiiKind};
pub use scoring::{score, Findings, Verdict};
pub use text::{clean_text, extract_text};

/// `status` of every stored result.
pub const COMPLETED: &str = "completed";

/// Result of analysing one document, before it is indexed.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub result: ScanResult,
    pub fingerprint: Fingerprint,
}

/// Run every detector on a document against the current index.
pub fn analyze(task_id: &str, filename: &str, content: &[u8], index: &FingerprintIndex) -> Analysis {
    let started = Instant::now();

    let text = extract_text(content, filename);
    let fingerprint = Fingerprint::new(task_id, content, &text);

    let findings = Findings {
        metadata: if is_pdf(filename) { analyze_metadata(content, &text) } else { None },
        duplicate: index.search(&fingerprint),
        pii: detect_pii(&text),
    };
    let verdict = score(&findings);

    tracing::debug!(
        task_id,
        chars = text.len(),
        metadata = findings.metadata.is_some(),
        duplicate = findings.duplicate.is_some(),
        pii = findings.pii.kinds.len(),
        "🔬 Detectors finished"
    );

    let result = ScanResult {
        file_id: task_id.to_string(),
        filename: filename.to_string(),
        fraud_score: verdict.fraud_score,
        severity: verdict.severity,
        is_duplicate: findings.duplicate.is_some(),
        duplicate_source_id: findings.duplicate.map(|d| d.source_id),
        anomalies: verdict.anomalies,
        text_content: text,
        processing_time: started.elapsed().as_millis() as u64,
        confidence: verdict.confidence,
        status: COMPLETED.to_string(),
        scanned_at: Utc::now(),
    };

    Analysis { result, fingerprint }
}

/// Analyse a document and index it unless it is a duplicate.
pub fn scan_document(
    task_id: &str,
    filename: &str,
    content: &[u8],
    index: &mut FingerprintIndex,
) -> IndexResult<ScanResult> {
    let Analysis { result, fingerprint } = analyze(task_id, filename, content, index);
    if !result.is_duplicate {
        index.add(fingerprint)?;
    }
    Ok(result)
}
