//! Structural slicing of an HTML document into slide fragments.
//!
//! This is a slice, not a parser: tags are located with lazy patterns and the
//! matched text is returned verbatim. Unbalanced or nested markup is left as is.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::ExtractionError;

/// First `<head>` block. `<header>` must not match.
#[allow(clippy::expect_used)]
static HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<head(?:\s[^>]*)?>(.*?)</head\s*>").expect("head pattern")
});

/// Every `<section>` block, outer markup included.
#[allow(clippy::expect_used)]
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<section(?:\s[^>]*)?>.*?</section\s*>").expect("section pattern")
});

#[allow(clippy::expect_used)]
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title pattern")
});

/// Result of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// `<section>...</section>` blocks in document order
    pub sections: Vec<String>,
    /// Inner content of the first `<head>`, or empty
    pub head: String,
}

/// Slice `html` into its section fragments and head content.
///
/// Fails only when no section block is found.
pub fn extract(html: &str) -> Result<ExtractedDocument, ExtractionError> {
    let head = HEAD_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let sections: Vec<String> = SECTION_RE
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect();

    debug!(
        "[Extract] {} bytes -> {} sections, head {} bytes",
        html.len(),
        sections.len(),
        head.len()
    );

    if sections.is_empty() {
        return Err(ExtractionError::NoSections);
    }

    Ok(ExtractedDocument { sections, head })
}

/// Text of the first `<title>` in `head`, whitespace collapsed.
pub fn document_title(head: &str) -> Option<String> {
    let raw = TITLE_RE.captures(head)?.get(1)?.as_str();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    const DECK: &str = r#"<!DOCTYPE html>
<html>
<HEAD lang="en">
  <title>Quarterly</title>
  <style>body { color: red; }</style>
</HEAD>
<body>
  <header>ignored</header>
  <section id="one">One</section>
  <div><SECTION class="x">
    Two
  </SECTION></div>
  <section>Three</section>
</body>
</html>"#;

    // ==================== extract tests ====================

    #[test]
    fn test_extract_sections_in_order() {
        let doc = extract(DECK).unwrap();
        assert_eq!(
            doc.sections,
            vec![
                r#"<section id="one">One</section>"#.to_string(),
                "<SECTION class=\"x\">\n    Two\n  </SECTION>".to_string(),
                "<section>Three</section>".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_head_inner_markup() {
        let doc = extract(DECK).unwrap();
        assert_eq!(
            doc.head,
            "\n  <title>Quarterly</title>\n  <style>body { color: red; }</style>\n"
        );
    }

    #[test]
    fn test_extract_no_head() {
        let doc = extract("<section>a</section>").unwrap();
        assert!(doc.head.is_empty());
    }

    #[test]
    fn test_extract_header_is_not_head() {
        let doc = extract("<header>nav</header><section>a</section>").unwrap();
        assert!(doc.head.is_empty());
    }

    #[test]
    fn test_extract_no_sections() {
        let err = extract("<html><head></head><body><div>x</div></body></html>").unwrap_err();
        assert_eq!(err, ExtractionError::NoSections);
    }

    #[test]
    fn test_extract_section_prefix_tag_is_not_section() {
        assert!(extract("<sections>a</sections>").is_err());
    }

    #[test]
    fn test_extract_unclosed_section_is_not_matched() {
        let doc = extract("<section>a</section><section>b").unwrap();
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn test_extract_nested_section_stops_at_first_close() {
        let doc = extract("<section><section>in</section>out</section>").unwrap();
        assert_eq!(doc.sections, vec!["<section><section>in</section>".to_string()]);
    }

    #[test]
    fn test_extract_is_deterministic() {
        assert_eq!(extract(DECK).unwrap(), extract(DECK).unwrap());
    }

    // ==================== document_title tests ====================

    #[test]
    fn test_document_title() {
        let doc = extract(DECK).unwrap();
        assert_eq!(document_title(&doc.head).as_deref(), Some("Quarterly"));
    }

    #[test]
    fn test_document_title_collapses_whitespace() {
        let head = "<title>\n  Hello\n   World </title>";
        assert_eq!(document_title(head).as_deref(), Some("Hello World"));
    }

    #[test]
    fn test_document_title_missing_or_blank() {
        assert_eq!(document_title("<meta charset=\"utf-8\">"), None);
        assert_eq!(document_title("<title>   </title>"), None);
    }
}
