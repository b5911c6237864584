//! Visible-text extraction for content predicates.

use scraper::Html;

/// Protocol for turning markup into the text a reader would see.
pub trait TextExtractor: Send + Sync {
    /// Extracts visible text from `markup`.
    fn extract_text(&self, markup: &str) -> String;

    /// Whether the visible text contains every token, ignoring case.
    fn contains_all(&self, markup: &str, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let text = self.extract_text(markup).to_lowercase();
        tokens
            .iter()
            .all(|token| text.contains(token.to_lowercase().as_str()))
    }
}

/// Text extractor that skips `<script>` and `<style>` contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

impl TextExtractor for HtmlTextExtractor {
    fn extract_text(&self, markup: &str) -> String {
        let document = Html::parse_document(markup);
        let mut parts: Vec<&str> = Vec::new();

        for node in document.tree.root().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()));
            let trimmed = text.trim();
            if !hidden && !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_skips_scripts() {
        let html = r"<html><head><style>p { color: red }</style></head>
            <body><p>Ham and</p><script>var cheese = 1;</script><p>eggs</p></body></html>";
        assert_eq!(HtmlTextExtractor.extract_text(html), "Ham and eggs");
    }

    #[test]
    fn test_contains_all() {
        let html = "<p>Ham sandwich with Cheese</p>";
        let tokens = vec!["ham".to_string(), "cheese".to_string()];
        assert!(HtmlTextExtractor.contains_all(html, &tokens));

        let tokens = vec!["ham".to_string(), "mustard".to_string()];
        assert!(!HtmlTextExtractor.contains_all(html, &tokens));
    }

    #[test]
    fn test_empty_query_always_matches() {
        assert!(HtmlTextExtractor.contains_all("", &[]));
    }
}
