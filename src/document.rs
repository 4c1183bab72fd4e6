//! Extraction session.
//!
//! A [`Document`] owns the parsed tree and resolves the title and the
//! content lazily, each at most once. Content extraction rewrites the tree,
//! so the title is always resolved first.
//!
//! The tree is single-threaded: a `Document` is neither `Send` nor `Sync`.

use std::cell::OnceCell;
use std::io::Read;

use url::Url;

use crate::dom::{self, NodeRef};
use crate::encoding::transcode_to_utf8;
use crate::error::{Error, Result};
use crate::extractor::{extract_content, Content};
use crate::options::Options;
use crate::result::Article;
use crate::title::resolve_title;
use crate::url_utils::parse_base_url;

/// A parsed page and its memoized extraction results.
///
/// # Example
///
/// ```rust
/// use rs_readability::{Document, Options};
///
/// let html = r#"<html><head><title>A Rather Long Headline | Site</title></head>
/// <body><div><p>Some body text that is long enough to count.</p></div></body></html>"#;
///
/// let doc = Document::parse(html)?;
/// assert_eq!(doc.title(), "A Rather Long Headline");
/// assert_eq!(doc.content(), "<p>Some body text that is long enough to count.</p>");
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub struct Document {
    tree: dom::Document,
    options: Options,
    base_url: Option<Url>,
    title: OnceCell<String>,
    content: OnceCell<Content>,
}

impl Document {
    /// Parse `html` with default options.
    ///
    /// # Errors
    /// See [`Document::parse_with_options`].
    pub fn parse(html: &str) -> Result<Self> {
        Self::parse_with_options(html, Options::default())
    }

    /// Parse `html`, keeping `options` for the lifetime of the session.
    ///
    /// # Errors
    /// [`Error::InvalidBaseUrl`] when `options.url` does not parse, and
    /// [`Error::Parse`] when the parsed tree has no element at all.
    pub fn parse_with_options(html: &str, options: Options) -> Result<Self> {
        let base_url = parse_base_url(options.url.as_deref())?;
        let tree = dom::parse(html);
        if dom::descendant_elements(&tree.root()).is_empty() {
            return Err(Error::Parse("document has no root element".to_string()));
        }

        Ok(Self {
            tree,
            options,
            base_url,
            title: OnceCell::new(),
            content: OnceCell::new(),
        })
    }

    /// Parse raw bytes, detecting the character encoding first.
    ///
    /// # Errors
    /// See [`Document::parse_with_options`].
    pub fn from_bytes(html: &[u8], options: Options) -> Result<Self> {
        Self::parse_with_options(&transcode_to_utf8(html), options)
    }

    /// Read the whole of `reader` and parse it as [`Document::from_bytes`] does.
    ///
    /// # Errors
    /// [`Error::Io`] when reading fails, otherwise see
    /// [`Document::parse_with_options`].
    pub fn from_reader(mut reader: impl Read, options: Options) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, options)
    }

    /// Options this session was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parsed base URL, if one was configured.
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// The page title, computed on first call.
    pub fn title(&self) -> &str {
        self.title.get_or_init(|| resolve_title(&self.tree.root()))
    }

    fn extracted(&self) -> &Content {
        self.content.get_or_init(|| {
            // resolve the title while the tree is still untouched
            self.title();
            extract_content(&self.tree.root(), &self.options, self.base_url.as_ref())
        })
    }

    /// Sanitized HTML of the main content, computed on first call.
    pub fn content(&self) -> &str {
        &self.extracted().html
    }

    /// Plain text of the main content.
    pub fn text_content(&self) -> &str {
        &self.extracted().text
    }

    /// The selected content nodes that survived cleaning, in document order.
    pub fn content_nodes(&self) -> Vec<NodeRef<'_>> {
        let root = self.tree.root();
        self.extracted()
            .nodes
            .iter()
            .map(|id| NodeRef::new(*id, root.tree))
            .collect()
    }

    /// Title and content as an owned [`Article`].
    pub fn article(&self) -> Article {
        Article {
            title: self.title().to_string(),
            content: self.content().to_string(),
            text_content: self.text_content().to_string(),
            url: self.base_url.as_ref().map(ToString::to_string),
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("base_url", &self.base_url)
            .field("title", &self.title.get())
            .field("extracted", &self.content.get().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "This is the first paragraph of a story, written to be long enough for scoring.";

    fn page(title: &str) -> String {
        format!(
            r#"<html><head><title>{title}</title></head><body>
            <div class="sidebar"><a href="/x">Related</a></div>
            <div id="story"><p>{BODY}</p><p>{BODY}</p><img src="/img/photo.jpg"></div>
            </body></html>"#
        )
    }

    #[test]
    fn content_is_memoized() {
        let doc = Document::parse(&page("Title")).unwrap();
        let first = doc.content().to_string();
        let second = doc.content();
        assert_eq!(first, second);
        assert!(first.contains("first paragraph"));
        assert!(!first.contains("Related"));
    }

    #[test]
    fn title_survives_content_extraction() {
        let doc = Document::parse(&page("Some Long Story Title - Site")).unwrap();
        let _ = doc.content();
        assert_eq!(doc.title(), "Some Long Story Title");
    }

    #[test]
    fn base_url_rewrites_links() {
        let options = Options {
            url: Some("https://news.example.com/2024/story.html".to_string()),
            ..Options::default()
        };
        let doc = Document::parse_with_options(&page("T"), options).unwrap();
        assert!(doc
            .content()
            .contains(r#"<img src="https://news.example.com/img/photo.jpg"/>"#));
        assert_eq!(
            doc.base_url().map(Url::as_str),
            Some("https://news.example.com/2024/story.html")
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let options = Options {
            url: Some("::not a url::".to_string()),
            ..Options::default()
        };
        match Document::parse_with_options("<p>x</p>", options) {
            Err(Error::InvalidBaseUrl(_)) => {}
            other => panic!("expected InvalidBaseUrl, got {other:?}"),
        }
    }

    #[test]
    fn content_nodes_point_into_the_tree() {
        let doc = Document::parse(&page("T")).unwrap();
        let nodes = doc.content_nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(dom::get_attribute(&nodes[0], "id"), Some("story".to_string()));
    }

    #[test]
    fn from_reader_reads_everything() {
        let html = page("Reader Title That Is Long | Site");
        let doc = Document::from_reader(html.as_bytes(), Options::default()).unwrap();
        assert_eq!(doc.title(), "Reader Title That Is Long");
    }

    #[test]
    fn article_snapshot() {
        let doc = Document::parse(&page("T")).unwrap();
        let article = doc.article();
        assert_eq!(article.title, "T");
        assert_eq!(article.content, doc.content());
        assert_eq!(article.text_content, doc.text_content());
        assert!(article.url.is_none());
    }
}
