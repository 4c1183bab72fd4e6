//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// Snapshot of what was extracted from one document.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let article = extract("<html><head><title>Hello</title></head><body><p>Hi.</p></body></html>")?;
/// assert_eq!(article.title, "Hello");
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Resolved title, `""` when the page has none.
    pub title: String,

    /// Sanitized HTML of the main content.
    pub content: String,

    /// Main content as plain text, one block per line.
    pub text_content: String,

    /// Base URL relative links were resolved against.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

impl Article {
    /// Length of the text content in Unicode codepoints.
    #[must_use]
    pub fn length(&self) -> usize {
        self.text_content.chars().count()
    }

    /// Whether no text was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_content.is_empty()
    }
}
