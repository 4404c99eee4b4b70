//! Turns the individual findings into a fraud score and severity.
//!
//! | Finding    | Effect on the score                   |
//! |------------|---------------------------------------|
//! | Metadata   | raised to at least 85                 |
//! | Duplicate  | set to 100                            |
//! | PII        | +20, only while the score is below 30 |

use super::metadata::MetadataFinding;
use super::pii::PiiFindings;
use crate::dedup::DuplicateMatch;
use crate::models::{Anomaly, Severity};

pub const METADATA_SCORE: u8 = 85;
pub const DUPLICATE_SCORE: u8 = 100;
pub const PII_BONUS: u8 = 20;

pub const METADATA_ANOMALY: &str = "Metadata Fraud";
pub const DUPLICATE_ANOMALY: &str = "Duplicate Discovery";
pub const PII_ANOMALY: &str = "PII Detected";

/// Everything the detectors reported for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub metadata: Option<MetadataFinding>,
    pub duplicate: Option<DuplicateMatch>,
    pub pii: PiiFindings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub fraud_score: u8,
    pub severity: Severity,
    pub anomalies: Vec<Anomaly>,
    /// Mean anomaly confidence, rounded to 4 decimals
    pub confidence: f64,
}

pub fn score(findings: &Findings) -> Verdict {
    let mut fraud_score: u8 = 0;
    let mut anomalies = Vec::new();

    if let Some(meta) = &findings.metadata {
        fraud_score = fraud_score.max(METADATA_SCORE);
        anomalies.push(Anomaly::new(METADATA_ANOMALY, meta.message.clone(), meta.confidence));
    }

    if let Some(dup) = &findings.duplicate {
        fraud_score = DUPLICATE_SCORE;
        let description = if dup.score >= 1.0 {
            "Byte-identical file was already scanned."
        } else {
            "Text matches a previously scanned document."
        };
        anomalies.push(Anomaly::new(DUPLICATE_ANOMALY, description, dup.score));
    }

    if !findings.pii.is_empty() {
        anomalies.push(Anomaly::new(PII_ANOMALY, findings.pii.describe(), findings.pii.confidence()));
        if fraud_score < Severity::WARNING_THRESHOLD {
            fraud_score += PII_BONUS;
        }
    }

    let fraud_score = fraud_score.min(100);
    Verdict {
        fraud_score,
        severity: Severity::from_score(fraud_score),
        confidence: mean_confidence(&anomalies),
        anomalies,
    }
}

fn mean_confidence(anomalies: &[Anomaly]) -> f64 {
    if anomalies.is_empty() {
        return 0.0;
    }
    let mean = anomalies.iter().map(|a| a.confidence).sum::<f64>() / anomalies.len() as f64;
    (mean * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pii::PiiKind;

    fn metadata(confidence: f64) -> Option<MetadataFinding> {
        Some(MetadataFinding {
            message: "METADATA_MISMATCH".into(),
            confidence,
        })
    }

    fn duplicate(score: f64) -> Option<DuplicateMatch> {
        Some(DuplicateMatch {
            source_id: "src".into(),
            score,
        })
    }

    fn pii(kinds: &[PiiKind]) -> PiiFindings {
        PiiFindings { kinds: kinds.to_vec() }
    }

    #[test]
    fn test_clean_document() {
        let verdict = score(&Findings::default());
        assert_eq!(verdict.fraud_score, 0);
        assert_eq!(verdict.severity, Severity::Safe);
        assert!(verdict.anomalies.is_empty());
        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_pii_alone_is_safe() {
        let verdict = score(&Findings {
            pii: pii(&[PiiKind::Pan]),
            ..Default::default()
        });
        assert_eq!(verdict.fraud_score, 20);
        assert_eq!(verdict.severity, Severity::Safe);
        assert_eq!(verdict.anomalies[0].kind, PII_ANOMALY);
        assert_eq!(verdict.confidence, 0.75);
    }

    #[test]
    fn test_metadata_is_critical_and_pii_adds_nothing() {
        let verdict = score(&Findings {
            metadata: metadata(0.78),
            pii: pii(&[PiiKind::Pan, PiiKind::Aadhaar]),
            ..Default::default()
        });
        assert_eq!(verdict.fraud_score, 85);
        assert_eq!(verdict.severity, Severity::Critical);
        assert_eq!(verdict.anomalies.len(), 2);
        assert_eq!(verdict.confidence, 0.865);
    }

    #[test]
    fn test_duplicate_wins() {
        let verdict = score(&Findings {
            metadata: metadata(0.92),
            duplicate: duplicate(1.0),
            pii: PiiFindings::default(),
        });
        assert_eq!(verdict.fraud_score, 100);
        assert_eq!(verdict.severity, Severity::Critical);
        let kinds: Vec<&str> = verdict.anomalies.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, vec![METADATA_ANOMALY, DUPLICATE_ANOMALY]);
        assert_eq!(verdict.confidence, 0.96);
    }

    #[test]
    fn test_confidence_rounding() {
        let verdict = score(&Findings {
            metadata: metadata(0.78),
            duplicate: duplicate(0.8712345),
            pii: pii(&[PiiKind::Aadhaar]),
        });
        assert_eq!(verdict.confidence, 0.8004);
    }
}
