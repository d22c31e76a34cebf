//! Text extraction from paginated documents.
//!
//! A [`TextExtractor`] yields one text block per page, in page order. [`extract_text`]
//! flattens those blocks into the single blob the tagger consumes.

use std::fmt;

use serde_derive::Deserialize;

mod pdf;

pub use pdf::PdfExtractor;

/// What to do with a page that yields no text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPagePolicy {
    /// Empty pages contribute nothing.
    #[default]
    Skip,
    /// An empty page makes the whole document unreadable.
    Reject,
}

/// Reasons a document could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The document could not be opened or parsed.
    Unreadable(String),
    /// Page `n` (1-based) yielded no text and empty pages are rejected.
    EmptyPage(u32),
    /// No page yielded any text.
    Empty,
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Unreadable(ref reason) => write!(formatter, "Unreadable document: {reason}"),
            Self::EmptyPage(page) => write!(formatter, "Page {page} contains no extractable text"),
            Self::Empty => write!(formatter, "Document contains no extractable text"),
        }
    }
}

impl std::error::Error for ExtractionError {}

/// Converts a binary document into per-page text.
pub trait TextExtractor: Send + Sync {
    /// Text of each page, in page order. Pages without text are dropped or rejected
    /// according to the extractor's [`EmptyPagePolicy`].
    ///
    /// # Errors
    /// Errors if the document cannot be parsed, or an empty page is rejected.
    fn pages(&self, document: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// Extract the whole text of `document`, pages joined with a newline so words never
/// fuse across a page break.
///
/// # Errors
/// Errors if the extractor fails, or if no page yields any text.
pub fn extract_text(
    extractor: &dyn TextExtractor,
    document: &[u8],
) -> Result<String, ExtractionError> {
    let pages = extractor.pages(document)?;
    let text = pages
        .iter()
        .map(|page| page.trim_end())
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}
