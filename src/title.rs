//! Title resolution.
//!
//! Uses the Open Graph or Twitter card title when one is present, the
//! `<title>` element otherwise, and strips a trailing or leading site name
//! when the title is split by exactly one kind of separator.

use crate::dom::{self, NodeRef};
use crate::patterns::TITLE_SEPARATORS;

/// Shortest refined title accepted, exclusive.
const MIN_REFINED_LENGTH: usize = 10;

/// `content` of the first `og:title` / `twitter:title` meta element.
fn meta_title(root: &NodeRef) -> Option<String> {
    dom::elements_by_tag(root, &["meta"])
        .into_iter()
        .find(|meta| {
            meta.attr("property").is_some_and(|p| &*p == "og:title")
                || meta.attr("name").is_some_and(|n| &*n == "twitter:title")
        })
        .and_then(|meta| dom::get_attribute(&meta, "content"))
}

/// Text of the first `<title>` element.
fn document_title(root: &NodeRef) -> Option<String> {
    dom::find_first(root, "title").map(|title| dom::text_content(&title).to_string())
}

/// Drop a site name split off by a separator.
///
/// Each separator whose split produces more than one segment offers its
/// first segment. When separators disagree the raw title is kept.
#[must_use]
pub fn refine_title(raw: &str) -> String {
    let mut refined: Option<&str> = None;
    let mut matches = 0;
    for separator in TITLE_SEPARATORS {
        let mut segments = raw.split(separator);
        let (Some(first), Some(_)) = (segments.next(), segments.next()) else {
            continue;
        };
        refined = Some(first.trim());
        matches += 1;
    }

    match refined {
        Some(candidate) if matches == 1 && candidate.chars().count() > MIN_REFINED_LENGTH => {
            candidate.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Resolve the title of the document under `root`; `""` when it has none.
#[must_use]
pub fn resolve_title(root: &NodeRef) -> String {
    let raw = meta_title(root)
        .or_else(|| document_title(root))
        .unwrap_or_default();
    refine_title(raw.trim())
}
