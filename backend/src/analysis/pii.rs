//! PAN and Aadhaar detection.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PAN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b[A-Z]{5}[0-9]{4}[A-Z]\b").ok());
static AADHAAR: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}\b").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiKind {
    Pan,
    Aadhaar,
}

impl fmt::Display for PiiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiiKind::Pan => f.write_str("PAN_DETECTED"),
            PiiKind::Aadhaar => f.write_str("AADHAAR_DETECTED"),
        }
    }
}

/// Kinds of PII found in a text, in detection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiiFindings {
    pub kinds: Vec<PiiKind>,
}

impl PiiFindings {
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// 0.75 for one kind, 0.95 for more, 0 for none.
    pub fn confidence(&self) -> f64 {
        match self.kinds.len() {
            0 => 0.0,
            1 => 0.75,
            _ => 0.95,
        }
    }

    /// `"Contains: PAN_DETECTED, AADHAAR_DETECTED"`
    pub fn describe(&self) -> String {
        let names: Vec<String> = self.kinds.iter().map(ToString::to_string).collect();
        format!("Contains: {}", names.join(", "))
    }
}

fn matches(re: &Lazy<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(text))
}

/// PAN is matched case-insensitively, Aadhaar with optional space or dash separators.
pub fn detect_pii(text: &str) -> PiiFindings {
    let mut kinds = Vec::new();
    if text.is_empty() {
        return PiiFindings { kinds };
    }
    if matches(&PAN, &text.to_uppercase()) {
        kinds.push(PiiKind::Pan);
    }
    if matches(&AADHAAR, text) {
        kinds.push(PiiKind::Aadhaar);
    }
    PiiFindings { kinds }
}
