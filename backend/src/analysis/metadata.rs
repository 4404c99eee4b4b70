//! PDF metadata forensics.
//!
//! Reads the document information dictionary (`/CreationDate`, `/Creator`)
//! straight from the raw bytes, with the XMP packet as a fallback.

use once_cell::sync::Lazy;
use regex::Regex;

static CREATION_DATE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"/CreationDate\s*\(([^)]*)\)|<xmp:CreateDate>([^<]*)<").ok());
static CREATOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"/Creator\s*\(([^)]*)\)|<xmp:CreatorTool>([^<]*)<").ok());
static FOUR_DIGITS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\d{4}").ok());
static TEXT_YEAR: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b(20\d{2})\b").ok());

pub const MISMATCH_MESSAGE: &str = "METADATA_MISMATCH: Hidden year is later than document year";
pub const CANVA_MESSAGE: &str = "SUSPICIOUS_CREATOR_TOOL: Canva";

/// A suspicious metadata observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataFinding {
    pub message: String,
    pub confidence: f64,
}

/// Raw metadata fields of a PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfInfo {
    pub creation_date: Option<String>,
    pub creator: Option<String>,
}

impl PdfInfo {
    pub fn parse(content: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(content);
        Self {
            creation_date: first_capture(&CREATION_DATE, &raw),
            creator: first_capture(&CREATOR, &raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.creation_date.is_none() && self.creator.is_none()
    }

    /// First four-digit run of the creation date (`D:20240312...` gives 2024).
    pub fn creation_year(&self) -> Option<i32> {
        let date = self.creation_date.as_deref()?;
        let re = FOUR_DIGITS.as_ref()?;
        re.find(date)?.as_str().parse().ok()
    }
}

fn first_capture(re: &Lazy<Option<Regex>>, raw: &str) -> Option<String> {
    let caps = re.as_ref()?.captures(raw)?;
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().trim().to_string())
}

/// Every standalone `20xx` year written in the text.
pub fn text_years(text: &str) -> Vec<i32> {
    TEXT_YEAR
        .as_ref()
        .map(|re| {
            re.captures_iter(text)
                .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse().ok()))
                .collect()
        })
        .unwrap_or_default()
}

/// Compare the hidden creation year with the years visible in the text,
/// then look at the creator tool.
pub fn analyze_metadata(content: &[u8], text: &str) -> Option<MetadataFinding> {
    let info = PdfInfo::parse(content);
    if info.is_empty() {
        return None;
    }

    if let (Some(pdf_year), Some(latest)) = (info.creation_year(), text_years(text).into_iter().max()) {
        if pdf_year > latest {
            let confidence = if pdf_year - latest >= 4 { 0.92 } else { 0.78 };
            return Some(MetadataFinding {
                message: MISMATCH_MESSAGE.to_string(),
                confidence,
            });
        }
    }

    let creator = info.creator.unwrap_or_default().to_lowercase();
    if creator.contains("canva") {
        return Some(MetadataFinding {
            message: CANVA_MESSAGE.to_string(),
            confidence: 0.85,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(info: &str) -> Vec<u8> {
        format!("%PDF-1.7\n1 0 obj\n<< {} >>\nendobj\n%%EOF", info).into_bytes()
    }

    #[test]
    fn test_parse_info_dictionary() {
        let info = PdfInfo::parse(&pdf("/Creator (Microsoft Word) /CreationDate (D:20230105120000+05'30')"));
        assert_eq!(info.creator.as_deref(), Some("Microsoft Word"));
        assert_eq!(info.creation_year(), Some(2023));
    }

    #[test]
    fn test_parse_xmp_fallback() {
        let raw = b"<xmp:CreateDate>2025-01-02T10:00:00</xmp:CreateDate><xmp:CreatorTool>Canva</xmp:CreatorTool>";
        let info = PdfInfo::parse(raw);
        assert_eq!(info.creation_year(), Some(2025));
        assert_eq!(info.creator.as_deref(), Some("Canva"));
    }

    #[test]
    fn test_text_years_need_word_boundaries() {
        assert_eq!(text_years("FY 2019 and 2021, ref 120223 D:20240101"), vec![2019, 2021]);
    }

    #[test]
    fn test_recent_mismatch() {
        let finding = analyze_metadata(&pdf("/CreationDate (D:20240101)"), "Invoice dated 2022").unwrap();
        assert_eq!(finding.message, MISMATCH_MESSAGE);
        assert_eq!(finding.confidence, 0.78);
    }

    #[test]
    fn test_old_mismatch_is_more_confident() {
        let finding = analyze_metadata(&pdf("/CreationDate (D:20250101)"), "Invoice dated 2020").unwrap();
        assert_eq!(finding.confidence, 0.92);
    }

    #[test]
    fn test_consistent_years() {
        assert_eq!(analyze_metadata(&pdf("/CreationDate (D:20240101)"), "Invoice 2024"), None);
        assert_eq!(analyze_metadata(&pdf("/CreationDate (D:20240101)"), "no years here"), None);
    }

    #[test]
    fn test_canva_creator() {
        let finding = analyze_metadata(&pdf("/Creator (Canva)"), "text").unwrap();
        assert_eq!(finding.message, CANVA_MESSAGE);
        assert_eq!(finding.confidence, 0.85);
    }

    #[test]
    fn test_no_metadata() {
        assert_eq!(analyze_metadata(b"plain bytes", "2020"), None);
    }
}
