//! Whitelist serialization of the selected content.
//!
//! Walks the surviving nodes depth-first and writes two renderings at
//! once: markup restricted to the allowed tags and attributes, and plain
//! text with block boundaries turned into line breaks.

use url::Url;

use crate::dom::{self, NodeRef};
use crate::extractor::state::ExtractionState;
use crate::options::Options;
use crate::patterns::{INLINE_WHITESPACE, LINE_BREAKS};
use crate::url_utils::resolve_url;

/// Elements without content, written as `<tag/>`.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements that start a new line in the text rendering.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "ol",
    "p", "pre", "section", "table", "tr", "ul",
];

/// Both renderings of the content, whitespace-normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Serialized {
    pub html: String,
    pub text: String,
}

impl Serialized {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Collapse inline whitespace runs to one space and line-break runs to
/// one `\n`, then trim.
#[must_use]
pub fn normalize_whitespace(input: &str) -> String {
    let inline = INLINE_WHITESPACE.replace_all(input, " ");
    let lines = LINE_BREAKS.replace_all(&inline, "\n");
    lines.trim().to_string()
}

pub(crate) fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Attributes holding a URL that is rewritten against the base.
fn is_url_attribute(tag: &str, attribute: &str) -> bool {
    matches!(
        (tag, attribute),
        ("img" | "embed", "src") | ("a", "href")
    )
}

struct Writer<'o> {
    state: &'o ExtractionState,
    options: &'o Options,
    base: Option<&'o Url>,
    html: String,
    text: String,
}

impl Writer<'_> {
    fn write_node(&mut self, node: &NodeRef) {
        if node.is_text() {
            let text = node.text();
            escape_text(&text, &mut self.html);
            self.text.push_str(&text);
            return;
        }

        let Some(tag) = dom::tag_name(node) else {
            // document/fragment nodes have children, comments do not
            for child in node.children() {
                self.write_node(&child);
            }
            return;
        };

        let emit = self.options.allows_tag(&tag) && !self.state.is_synthetic(node.id);
        let block = BLOCK_TAGS.contains(&tag.as_str());
        let void = VOID_TAGS.contains(&tag.as_str());

        if block || tag == "br" {
            self.text.push('\n');
        }

        if emit {
            self.open_tag(node, &tag, void);
        }
        if !void {
            for child in node.children() {
                self.write_node(&child);
            }
            if emit {
                self.html.push_str("</");
                self.html.push_str(&tag);
                self.html.push('>');
            }
        }

        if block {
            self.text.push('\n');
        }
    }

    fn open_tag(&mut self, node: &NodeRef, tag: &str, void: bool) {
        self.html.push('<');
        self.html.push_str(tag);
        for (name, value) in dom::get_all_attributes(node) {
            let name = name.to_ascii_lowercase();
            if !self.options.allows_attribute(&name) {
                continue;
            }
            let value = if is_url_attribute(tag, &name) {
                resolve_url(&value, self.base)
            } else {
                value
            };
            self.html.push(' ');
            self.html.push_str(&name);
            self.html.push_str("=\"");
            escape_attribute(&value, &mut self.html);
            self.html.push('"');
        }
        self.html.push_str(if void { "/>" } else { ">" });
    }
}

/// Serialize `nodes` under the allow-lists in `options`.
///
/// Elements outside the tag allow-list and synthetic paragraphs are
/// unwrapped: their children are written, the tag is not. Comments are
/// dropped.
#[must_use]
pub fn serialize(
    nodes: &[NodeRef],
    state: &ExtractionState,
    options: &Options,
    base: Option<&Url>,
) -> Serialized {
    let mut writer = Writer {
        state,
        options,
        base,
        html: String::new(),
        text: String::new(),
    };
    for node in nodes {
        writer.write_node(node);
    }
    Serialized {
        html: normalize_whitespace(&writer.html),
        text: normalize_whitespace(&writer.text),
    }
}

/// Unfiltered markup and text of `nodes`, normalized like [`serialize`].
#[must_use]
pub fn raw(nodes: &[NodeRef]) -> Serialized {
    let mut html = String::new();
    let mut text = String::new();
    for node in nodes {
        html.push_str(&dom::outer_html(node));
        text.push_str(&dom::text_content(node));
        text.push('\n');
    }
    Serialized {
        html: normalize_whitespace(&html),
        text: normalize_whitespace(&text),
    }
}
