//! Post-selection pruning.
//!
//! Second cleaning pass over the selected content only: decorative
//! headers, interactive widgets and containers whose make-up (images vs.
//! paragraphs, list items, form inputs, links) says "not article text" are
//! removed before serialization.

use tracing::debug;

use crate::dom::{self, NodeRef};
use crate::link_density::link_density;
use crate::options::Options;
use crate::patterns::count_commas;
use crate::scoring::class_weight;

const HEADERS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Interactive and embedded elements, always dropped.
const INTERACTIVE: &[&str] = &[
    "input", "select", "textarea", "button", "object", "iframe", "embed",
];

/// Containers checked by [`clean_conditionally`].
const CONDITIONAL_TAGS: &[&str] = &["table", "ul", "div"];

/// Headers linking out more than this are treated as navigation.
const MAX_HEADER_LINK_DENSITY: f64 = 0.33;

/// Containers with at least this many commas are kept without further checks.
const COMMA_SAFE_COUNT: usize = 10;

/// List items tolerated beyond the paragraph count.
const LIST_ITEM_ALLOWANCE: i64 = 100;

/// Elements of the selected subtrees in document order, roots included.
fn subset_elements<'a>(nodes: &[NodeRef<'a>]) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    for node in nodes {
        if node.is_element() {
            out.push(*node);
        }
        out.extend(dom::descendant_elements(node));
    }
    out
}

/// Remove spurious headers and interactive elements.
pub fn clean_headers_and_widgets(nodes: &[NodeRef], options: &Options) {
    dom::visit_unremoved(&subset_elements(nodes), |node| {
        let spurious = if dom::has_tag(node, HEADERS) {
            class_weight(node, &options.patterns) < 0
                || link_density(node) > MAX_HEADER_LINK_DENSITY
        } else {
            dom::has_tag(node, INTERACTIVE)
        };
        if spurious {
            dom::remove(node);
        }
        spurious
    });
}

/// Why a container should be removed, or `None` to keep it.
#[must_use]
pub fn conditional_removal_reason(node: &NodeRef, options: &Options) -> Option<&'static str> {
    let weight = class_weight(node, &options.patterns);
    if weight < 0 {
        return Some("negative class weight");
    }

    let text = dom::text_content(node);
    if count_commas(&text) >= COMMA_SAFE_COUNT {
        return None;
    }

    let paragraphs = dom::count_elements(node, &["p", "br"]);
    let images = dom::count_elements(node, &["img"]);
    let list_items = dom::count_elements(node, &["li"]) as i64 - LIST_ITEM_ALLOWANCE;
    let embeds = dom::elements_by_tag(node, &["embed"])
        .iter()
        .filter(|e| dom::has_attribute(e, "src"))
        .count();
    let inputs = dom::count_elements(node, &["input"]);

    let content_length = text.trim().chars().count();
    let density = link_density(node);
    let is_list = dom::has_tag(node, &["ul", "ol"]);

    if images > paragraphs && images > 1 {
        Some("too many images")
    } else if list_items > paragraphs as i64 && !is_list {
        Some("more list items than paragraphs")
    } else if inputs > paragraphs / 3 {
        Some("too many form inputs")
    } else if content_length < options.min_text_length && (images == 0 || images > 2) {
        Some("too short content length without a single image")
    } else if weight < 25 && density > 0.2 {
        Some("too many links for its weight")
    } else if weight >= 25 && density > 0.5 {
        Some("too many links for its weight")
    } else if (embeds == 1 && content_length < 75) || embeds > 1 {
        Some("embeds with too short a content length, or too many embeds")
    } else {
        None
    }
}

/// Remove `table`, `ul` and `div` containers that look like boilerplate.
pub fn clean_conditionally(nodes: &[NodeRef], options: &Options) {
    dom::visit_unremoved(&subset_elements(nodes), |node| {
        if !dom::has_tag(node, CONDITIONAL_TAGS) {
            return false;
        }
        let Some(reason) = conditional_removal_reason(node, options) else {
            return false;
        };
        debug!(
            tag = dom::tag_name(node).unwrap_or_default(),
            id = dom::get_attribute(node, "id").unwrap_or_default(),
            class = dom::get_attribute(node, "class").unwrap_or_default(),
            weight = class_weight(node, &options.patterns),
            reason,
            "conditionally cleaned element"
        );
        dom::remove(node);
        true
    });
}

/// Both pruning passes, in order.
pub fn prune_selection(nodes: &[NodeRef], options: &Options) {
    clean_headers_and_widgets(nodes, options);
    clean_conditionally(nodes, options);
}
