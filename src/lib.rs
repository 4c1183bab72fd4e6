//! # rs-readability
//!
//! Readable main-content extraction from HTML pages.
//!
//! The library finds the block of a page that holds the article (title and
//! body), discarding navigation, advertisements, widgets and other
//! boilerplate, and returns it as whitelisted HTML and as plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::{extract, Document};
//!
//! let html = r#"<html><head><title>Local Council Approves New Park | Town News</title></head>
//! <body>
//!   <div class="menu"><a href="/">Home</a></div>
//!   <div class="article-body"><p>The council voted on Monday, after a long debate, to build a park.</p></div>
//! </body></html>"#;
//!
//! let article = extract(html)?;
//! assert_eq!(article.title, "Local Council Approves New Park");
//! assert!(article.text_content.contains("to build a park"));
//!
//! // The same, keeping the session around
//! let doc = Document::parse(html)?;
//! assert!(doc.content().starts_with("<p>The council"));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Preprocessing**: scripts and class/id-flagged furniture are removed,
//!   `<br><br>` runs and paragraph-like `<div>`s become `<p>`s
//! - **Scoring**: each paragraph votes for its parent and grandparent
//! - **Selection**: the best container plus related siblings
//! - **Sanitizing**: widget and boilerplate pruning, then serialization
//!   under a tag/attribute allow-list with absolute URLs

mod document;
mod error;
mod options;
mod result;

/// DOM operations adapter over the `dom_query` arena.
pub mod dom;

/// Compiled class/id and text patterns.
pub mod patterns;

/// Title resolution with site-name stripping.
pub mod title;

/// Candidate scoring and class weights.
pub mod scoring;

/// Link density of a subtree.
pub mod link_density;

/// Best candidate and sibling selection.
pub mod selector;

/// Extraction pipeline (preprocessing, state, pruning).
pub mod extractor;

/// Allow-list serialization of the content.
pub mod serialize;

/// URL resolution against the document base.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use document::Document;
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS};
pub use patterns::Patterns;
pub use result::Article;

/// Extract the article from an HTML string using default options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let article = extract("<html><body><article><p>Content.</p></article></body></html>")?;
/// assert_eq!(article.content, "<p>Content.</p>");
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<Article> {
    extract_with_options(html, &Options::default())
}

/// Extract the article from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let options = Options {
///     url: Some("https://example.com/posts/1".to_string()),
///     ..Options::default()
/// };
/// let article = extract_with_options(r#"<p>See <a href="/about">this page</a>.</p>"#, &options)?;
/// assert!(article.content.contains(r#"href="https://example.com/about""#));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<Article> {
    let document = Document::parse_with_options(html, options.clone())?;
    Ok(document.article())
}

/// Extract the article from raw bytes, detecting the character encoding.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let article = extract_bytes(html, &Options::default())?;
/// assert!(article.text_content.contains("Café"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8], options: &Options) -> Result<Article> {
    let document = Document::from_bytes(html, options.clone())?;
    Ok(document.article())
}
