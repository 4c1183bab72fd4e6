//! Configuration options for content extraction.
//!
//! An `Options` value is captured by a [`Document`](crate::Document) when
//! it is built and never changes afterwards, so overrides must be made
//! before extraction starts.

use crate::patterns::Patterns;

/// Tags kept in the serialized output. Everything else is unwrapped.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "div", "p", "a", "img", "figure", "br", "span", "strong", "font", "h1", "h2", "h3", "h4",
    "h5", "h6", "embed",
];

/// Attributes kept in the serialized output.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["src", "href"];

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     min_text_length: 40,
///     url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// assert!(options.allows_tag("p"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum paragraph text length (Unicode codepoints) before it counts
    /// towards a candidate's score. Also the short-content threshold used
    /// by conditional cleaning.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Tags emitted by the serializer (lowercase).
    ///
    /// Default: [`DEFAULT_ALLOWED_TAGS`]
    pub allowed_tags: Vec<String>,

    /// Attributes emitted by the serializer (lowercase).
    ///
    /// Default: [`DEFAULT_ALLOWED_ATTRIBUTES`]
    pub allowed_attributes: Vec<String>,

    /// Base URL used to resolve relative `href`/`src` values, typically
    /// the URL the document was fetched from.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Turn `<br><br>` runs into paragraph breaks before scoring.
    ///
    /// Default: `true`
    pub collapse_br_runs: bool,

    /// Class/id pattern table used by the heuristics.
    pub patterns: Patterns,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_text_length: 25,
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(ToString::to_string).collect(),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(ToString::to_string)
                .collect(),
            url: None,
            collapse_br_runs: true,
            patterns: Patterns::default(),
        }
    }
}

impl Options {
    /// Whether `tag` survives serialization.
    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether attribute `name` survives serialization.
    #[must_use]
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.allowed_attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.min_text_length, 25);
        assert_eq!(opts.allowed_tags.len(), 16);
        assert_eq!(opts.allowed_attributes, vec!["src", "href"]);
        assert!(opts.url.is_none());
        assert!(opts.collapse_br_runs);
    }

    #[test]
    fn test_allow_lists_are_case_insensitive() {
        let opts = Options::default();

        assert!(opts.allows_tag("H2"));
        assert!(opts.allows_tag("embed"));
        assert!(!opts.allows_tag("table"));
        assert!(opts.allows_attribute("HREF"));
        assert!(!opts.allows_attribute("class"));
    }

    #[test]
    fn test_custom_allow_lists() {
        let opts = Options {
            allowed_tags: vec!["p".to_string(), "table".to_string()],
            allowed_attributes: vec!["title".to_string()],
            ..Options::default()
        };

        assert!(opts.allows_tag("table"));
        assert!(!opts.allows_tag("div"));
        assert!(opts.allows_attribute("title"));
        assert!(!opts.allows_attribute("href"));
    }
}
