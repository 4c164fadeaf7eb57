// Text Extractor: turns an uploaded PDF or plain-text blob into plain text.
// Blank results are not an error here; callers decide via `ExtractedText::is_blank`.

pub mod document;
#[cfg(test)]
pub mod fixtures;
pub mod pdf;

use serde::Serialize;
use thiserror::Error;

pub use document::{MediaType, RawDocument};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    ExtractionFailed(String),
}

/// Plain text extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedText {
    pub text: String,
    /// PDF pages that produced no text. Always empty for plain text.
    pub skipped_pages: Vec<u32>,
}

impl ExtractedText {
    /// True when nothing readable came out (e.g. a scanned, image-only PDF).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Extracts text from `document` according to its media type.
pub fn extract(document: &RawDocument) -> Result<ExtractedText, ExtractionError> {
    match document.media_type {
        MediaType::Pdf => {
            let pdf = pdf::extract_pdf_text(&document.content)?;
            Ok(ExtractedText {
                text: pdf.text,
                skipped_pages: pdf.skipped_pages,
            })
        }
        MediaType::PlainText => {
            let text = std::str::from_utf8(&document.content).map_err(|e| {
                ExtractionError::ExtractionFailed(format!(
                    "'{}' is not valid UTF-8: {e}",
                    document.source_name
                ))
            })?;
            Ok(ExtractedText {
                text: text.to_string(),
                skipped_pages: Vec::new(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_returned_unchanged() {
        let body = "Jane Doe\n\nSenior Engineer — built “fast” systems ✓\n";
        let doc = RawDocument::plain_text(body, "resume.txt");
        let extracted = extract(&doc).unwrap();
        assert_eq!(extracted.text, body);
        assert!(extracted.skipped_pages.is_empty());
        assert!(!extracted.is_blank());
    }

    #[test]
    fn test_whitespace_only_text_is_blank() {
        let doc = RawDocument::plain_text(" \n\t ", "empty.txt");
        let extracted = extract(&doc).unwrap();
        assert!(extracted.is_blank());
    }

    #[test]
    fn test_invalid_utf8_fails_extraction() {
        let doc = RawDocument::new(vec![0xff, 0xfe, 0x00, 0x41], MediaType::PlainText, "bad.txt");
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn test_malformed_pdf_fails_extraction() {
        let doc = RawDocument::new(b"%PDF-garbage".to_vec(), MediaType::Pdf, "resume.pdf");
        assert!(matches!(
            extract(&doc),
            Err(ExtractionError::ExtractionFailed(_))
        ));
    }

    #[test]
    fn test_pdf_pages_are_joined_in_order() {
        let bytes = fixtures::build_pdf(&[Some("Experience Rust"), None, Some("Education MIT")]);
        let doc = RawDocument::new(bytes, MediaType::Pdf, "resume.pdf");

        let extracted = extract(&doc).unwrap();
        assert_eq!(extracted.text, "Experience Rust\nEducation MIT");
        assert_eq!(extracted.skipped_pages, vec![2]);
        assert!(!extracted.is_blank());
    }

    #[test]
    fn test_pdf_without_text_extracts_to_blank() {
        let bytes = fixtures::build_pdf(&[None, None]);
        let doc = RawDocument::new(bytes, MediaType::Pdf, "scan.pdf");

        let extracted = extract(&doc).unwrap();
        assert_eq!(extracted.text, "");
        assert_eq!(extracted.skipped_pages, vec![1, 2]);
        assert!(extracted.is_blank());
    }

    #[test]
    fn test_char_count_counts_unicode_scalars() {
        let doc = RawDocument::plain_text("héllo", "a.txt");
        assert_eq!(extract(&doc).unwrap().char_count(), 5);
    }
}
