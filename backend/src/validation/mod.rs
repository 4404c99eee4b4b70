//! Upload validation.
//!
//! Checks run in order, and the first failure wins:
//!
//! 1. a filename is present
//! 2. its extension is one of [`ALLOWED_EXTENSIONS`]
//! 3. the body is not empty
//! 4. the body fits in the configured size limit

use crate::error::UploadError;

/// Accepted document extensions, lowercase with the leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 6] = [".pdf", ".docx", ".doc", ".jpg", ".jpeg", ".png"];

/// Lowercased extension of `filename` including the dot, or `""`.
///
/// ```
/// use fraudshield::validation::extension;
///
/// assert_eq!(extension("Invoice.PDF"), ".pdf");
/// assert_eq!(extension("README"), "");
/// ```
pub fn extension(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) => name[idx..].to_lowercase(),
    }
}

pub fn is_allowed(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension(filename).as_str())
}

/// Whether the document is treated as a PDF by the analysis.
pub fn is_pdf(filename: &str) -> bool {
    extension(filename) == ".pdf"
}

/// Whether the document is an image (no text layer without OCR).
pub fn is_image(filename: &str) -> bool {
    matches!(extension(filename).as_str(), ".jpg" | ".jpeg" | ".png")
}

/// Validate an upload, returning the filename to use.
pub fn validate_upload<'a>(
    filename: Option<&'a str>,
    content: &[u8],
    max_size: usize,
) -> Result<&'a str, UploadError> {
    let filename = filename
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(UploadError::MissingFilename)?;

    if !is_allowed(filename) {
        return Err(UploadError::UnsupportedType {
            extension: extension(filename),
            allowed: ALLOWED_EXTENSIONS.join(", "),
        });
    }

    if content.is_empty() {
        return Err(UploadError::EmptyFile);
    }

    if content.len() > max_size {
        return Err(UploadError::TooLarge {
            limit_mb: max_size / (1024 * 1024),
        });
    }

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 10 * 1024 * 1024;

    #[test]
    fn test_extension() {
        assert_eq!(extension("a/b/scan.JPEG"), ".jpeg");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension(".hidden"), "");
        assert_eq!(extension("noext"), "");
    }

    #[test]
    fn test_accepts_supported_documents() {
        for name in ["a.pdf", "b.DOCX", "c.doc", "d.jpg", "e.jpeg", "f.png"] {
            assert_eq!(validate_upload(Some(name), b"x", LIMIT), Ok(name));
        }
    }

    #[test]
    fn test_rejections_in_order() {
        assert_eq!(validate_upload(None, b"", LIMIT), Err(UploadError::MissingFilename));
        assert_eq!(validate_upload(Some("  "), b"x", LIMIT), Err(UploadError::MissingFilename));

        match validate_upload(Some("tool.exe"), b"", LIMIT) {
            Err(UploadError::UnsupportedType { extension, allowed }) => {
                assert_eq!(extension, ".exe");
                assert!(allowed.contains(".pdf"));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(validate_upload(Some("a.pdf"), b"", LIMIT), Err(UploadError::EmptyFile));
        assert_eq!(
            validate_upload(Some("a.pdf"), &[0u8; 11], 10),
            Err(UploadError::TooLarge { limit_mb: 0 })
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_upload(Some("a.png"), &[1u8; 16], 16).is_ok());
    }

    #[test]
    fn test_kinds() {
        assert!(is_pdf("x.Pdf"));
        assert!(!is_pdf("x.png"));
        assert!(is_image("x.PNG"));
        assert!(!is_image("x.docx"));
    }
}
