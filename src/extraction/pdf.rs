//! PDF text extraction backed by `lopdf`.
use lopdf::Document;

use super::{EmptyPagePolicy, ExtractionError, TextExtractor};

/// Extracts per-page text from PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor {
    /// What to do with pages that yield no text.
    empty_pages: EmptyPagePolicy,
}

impl PdfExtractor {
    /// Create a new extractor with the given empty-page policy.
    #[must_use]
    pub const fn new(empty_pages: EmptyPagePolicy) -> Self {
        Self { empty_pages }
    }
}

impl TextExtractor for PdfExtractor {
    #[tracing::instrument(
        name = "Extracting PDF text",
        skip(self, document),
        fields(bytes = document.len())
    )]
    fn pages(&self, document: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let pdf = Document::load_mem(document)
            .map_err(|err| ExtractionError::Unreadable(err.to_string()))?;
        let page_numbers = pdf.get_pages().into_keys().collect::<Vec<u32>>();
        tracing::debug!(pages = page_numbers.len(), "Loaded PDF");

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            // A page lopdf cannot decode counts as a page without text.
            let text = pdf.extract_text(&[page_number]).unwrap_or_else(|err| {
                tracing::debug!(page_number, "Unable to extract page text: {err}");
                String::new()
            });
            if text.trim().is_empty() {
                match self.empty_pages {
                    EmptyPagePolicy::Skip => {
                        tracing::debug!(page_number, "Skipping page without text");
                        continue;
                    }
                    EmptyPagePolicy::Reject => {
                        return Err(ExtractionError::EmptyPage(page_number));
                    }
                }
            }
            pages.push(text);
        }
        Ok(pages)
    }
}
