use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::extraction::ExtractionError;

/// Source formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    PlainText,
}

impl MediaType {
    /// Resolves the media type of an upload.
    ///
    /// The declared content type wins when it is one we know; otherwise the
    /// file extension decides. Browsers send `application/octet-stream` for
    /// files they cannot classify, which is why the extension fallback exists.
    pub fn detect(content_type: Option<&str>, source_name: &str) -> Result<Self, ExtractionError> {
        if let Some(declared) = content_type.map(essence) {
            match declared.as_str() {
                "application/pdf" | "application/x-pdf" => return Ok(MediaType::Pdf),
                "text/plain" => return Ok(MediaType::PlainText),
                _ => {}
            }
        }

        let extension = source_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(MediaType::Pdf),
            Some("txt") | Some("text") => Ok(MediaType::PlainText),
            _ => Err(ExtractionError::UnsupportedFormat(format!(
                "'{source_name}' ({})",
                content_type.unwrap_or("no content type")
            ))),
        }
    }
}

/// Strips parameters (`; charset=utf-8`) and normalises case.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// An uploaded file, consumed once by the extractor.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub content: Bytes,
    pub media_type: MediaType,
    pub source_name: String,
}

impl RawDocument {
    pub fn new(content: impl Into<Bytes>, media_type: MediaType, source_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            media_type,
            source_name: source_name.into(),
        }
    }

    #[cfg(test)]
    pub fn plain_text(text: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::new(Bytes::from(text.into()), MediaType::PlainText, source_name)
    }
}
