//! Extraction plus tagging, packaged as one read-only service.
//!
//! An [`Analyzer`] is built once at start-up and shared by every request through the
//! application state. It never changes after construction.
use std::fmt;
use std::sync::Arc;

use serde_derive::Serialize;

use crate::config::AnalysisConfig;
use crate::extraction::{self, ExtractionError, PdfExtractor, TextExtractor};
use crate::tagging::{self, RuleTagger, Tagger};

/// Nouns and verbs of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Surface forms of noun tokens.
    pub nouns: Vec<String>,
    /// Surface forms of verb tokens.
    pub verbs: Vec<String>,
}

/// Shared extraction and tagging service.
#[derive(Clone)]
pub struct Analyzer {
    /// Document to text.
    extractor: Arc<dyn TextExtractor>,
    /// Text to tagged tokens.
    tagger: Arc<dyn Tagger>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Analyzer")
    }
}

impl Analyzer {
    /// Create an analyzer from an extractor and a tagger.
    #[must_use]
    pub fn new(extractor: Arc<dyn TextExtractor>, tagger: Arc<dyn Tagger>) -> Self {
        Self { extractor, tagger }
    }

    /// PDF extractor plus rule-based tagger, as configured.
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            Arc::new(PdfExtractor::new(config.empty_pages)),
            Arc::new(RuleTagger::new()),
        )
    }

    /// Extract `document`'s text and split its nouns and verbs.
    ///
    /// # Errors
    /// Errors if the document cannot be read or contains no text.
    pub fn analyze(&self, document: &[u8]) -> Result<Analysis, ExtractionError> {
        let text = extraction::extract_text(self.extractor.as_ref(), document)?;
        Ok(self.analyze_text(&text))
    }

    /// Split the nouns and verbs of already extracted text.
    #[must_use]
    pub fn analyze_text(&self, text: &str) -> Analysis {
        let (nouns, verbs) = tagging::partition(self.tagger.tag(text));
        tracing::debug!(
            chars = text.len(),
            nouns = nouns.len(),
            verbs = verbs.len(),
            "Tagged document text"
        );
        Analysis { nouns, verbs }
    }
}
