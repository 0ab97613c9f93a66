use lopdf::Document as PdfDocument;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ExtractedText,
};

#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    /// Text of every page, in page order, joined into one string.
    fn extract(&self, bytes: &[u8]) -> AppResult<ExtractedText>;
}

/// Text-layer extraction backed by `lopdf`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract(&self, bytes: &[u8]) -> AppResult<ExtractedText> {
        let mut doc = PdfDocument::load_mem(bytes)?;

        // Owner-password-only PDFs open with an empty user password.
        if doc.is_encrypted() {
            doc.decrypt("").map_err(|e| {
                AppError::Extraction(format!(
                    "the document is encrypted and cannot be read ({})",
                    e
                ))
            })?;
        }

        let pages = doc.get_pages();
        log::debug!("Extracting text from {} PDF pages", pages.len());

        // Pages without a usable text layer count as empty.
        let texts = pages.keys().map(|&page_number| {
            doc.extract_text(&[page_number]).unwrap_or_else(|e| {
                log::debug!("No text extracted from page {}: {}", page_number, e);
                String::new()
            })
        });

        Ok(ExtractedText::from_pages(texts))
    }
}
