//! Text extraction from raw document bytes.
//!
//! There is no OCR and no compressed-stream decoding: the text is whatever
//! printable runs the file carries, cleaned the same way for every format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shorter printable runs are treated as binary noise.
pub const MIN_RUN_LEN: usize = 4;

/// Cap on the cleaned text kept per document.
pub const MAX_TEXT_CHARS: usize = 20_000;

static DISALLOWED: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^\w\s.,:/-]").ok());

/// Replace anything outside `[\w\s.,:/-]` by a space and collapse whitespace.
///
/// ```
/// use fraudshield::analysis::text::clean_text;
///
/// assert_eq!(clean_text("  Total:\t₹4,500 (paid)!  "), "Total: 4,500 paid");
/// ```
pub fn clean_text(text: &str) -> String {
    let replaced = match DISALLOWED.as_ref() {
        Some(re) => re.replace_all(text, " "),
        None => text.into(),
    };
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Runs of at least [`MIN_RUN_LEN`] printable ASCII bytes, joined by spaces.
pub fn printable_runs(content: &[u8]) -> String {
    let mut out = String::new();
    let mut run = String::new();

    let flush = |run: &mut String, out: &mut String| {
        if run.trim().len() >= MIN_RUN_LEN {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(run);
        }
        run.clear();
    };

    for &byte in content {
        if byte.is_ascii_graphic() || byte == b' ' || byte == b'\t' || byte == b'\n' || byte == b'\r' {
            run.push(byte as char);
        } else {
            flush(&mut run, &mut out);
        }
    }
    flush(&mut run, &mut out);
    out
}

/// Cleaned text of a document. Images yield nothing.
pub fn extract_text(content: &[u8], filename: &str) -> String {
    if crate::validation::is_image(filename) {
        return String::new();
    }
    let mut text = clean_text(&printable_runs(content));
    if let Some((idx, _)) = text.char_indices().nth(MAX_TEXT_CHARS) {
        text.truncate(idx);
    }
    text
}
