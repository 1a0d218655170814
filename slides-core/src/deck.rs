//! Slide sequence and loaded presentation.

use std::num::NonZeroUsize;

use url::Url;

use crate::error::ExtractionError;
use crate::extract::{ExtractedDocument, document_title};

/// Ordered, immutable, non-empty list of slide fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSequence {
    fragments: Vec<String>,
}

impl SlideSequence {
    /// Wrap `fragments`; an empty list is rejected.
    pub fn new(fragments: Vec<String>) -> Result<Self, ExtractionError> {
        if fragments.is_empty() {
            return Err(ExtractionError::NoSections);
        }
        Ok(Self { fragments })
    }

    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.fragments.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }
}

/// A fetched document ready to be shown.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub slides: SlideSequence,
    /// Inner `<head>` markup of the source document
    pub head: String,
    pub title: Option<String>,
    pub source: Url,
}

impl Presentation {
    pub fn from_document(doc: ExtractedDocument, source: Url) -> Result<Self, ExtractionError> {
        let title = document_title(&doc.head);
        Ok(Self {
            slides: SlideSequence::new(doc.sections)?,
            head: doc.head,
            title,
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert_eq!(SlideSequence::new(vec![]), Err(ExtractionError::NoSections));
    }

    #[test]
    fn test_sequence_access() {
        let seq = SlideSequence::new(vec!["<section>a</section>".into(), "<section>b</section>".into()])
            .unwrap();
        assert_eq!(seq.count().get(), 2);
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec!["<section>a</section>", "<section>b</section>"]
        );
    }

    #[test]
    fn test_presentation_from_document() {
        let doc = ExtractedDocument {
            sections: vec!["<section>a</section>".into()],
            head: "<title>Deck</title>".into(),
        };
        let source = Url::parse("https://example.com/").unwrap();
        let presentation = Presentation::from_document(doc, source.clone()).unwrap();
        assert_eq!(presentation.title.as_deref(), Some("Deck"));
        assert_eq!(presentation.source, source);
        assert_eq!(presentation.slides.count().get(), 1);
    }
}
