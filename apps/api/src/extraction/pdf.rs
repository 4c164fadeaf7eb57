//! Page-based PDF text extraction.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::extraction::ExtractionError;

/// Inserted between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n";

/// Text pulled out of a PDF, page by page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfText {
    pub text: String,
    /// 1-based numbers of pages that yielded no text (scanned or image-only).
    pub skipped_pages: Vec<u32>,
}

/// Parses `bytes` as a PDF and extracts the text of every page.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<PdfText, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| ExtractionError::ExtractionFailed("PDF parser aborted on malformed input".into()))?
    .map_err(|e| ExtractionError::ExtractionFailed(format!("PDF parse error: {e}")))?;

    Ok(join_pages(pages))
}

/// Concatenates page texts in page order, skipping pages with no text.
fn join_pages<I>(pages: I) -> PdfText
where
    I: IntoIterator<Item = String>,
{
    let mut kept = Vec::new();
    let mut skipped_pages = Vec::new();

    for (idx, page) in pages.into_iter().enumerate() {
        let trimmed = page.trim();
        if trimmed.is_empty() {
            skipped_pages.push(idx as u32 + 1);
            continue;
        }
        kept.push(trimmed.to_string());
    }

    PdfText {
        text: kept.join(PAGE_SEPARATOR).trim().to_string(),
        skipped_pages,
    }
}
