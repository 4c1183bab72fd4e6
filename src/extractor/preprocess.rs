//! Tree preprocessing.
//!
//! Runs once before scoring. It throws away subtrees that can never be
//! content and rewrites paragraph-like markup (`<br><br>` breaks, divs
//! used as paragraphs, loose text) into real `<p>` elements so the scorer
//! sees one vocabulary.

use std::collections::HashSet;

use tracing::debug;

use crate::dom::{self, NodeId, NodeRef};
use crate::options::Options;
use crate::patterns::Patterns;

use super::state::ExtractionState;

/// Elements removed whatever their class or id.
const ALWAYS_REMOVED: &[&str] = &["script", "style", "noscript"];

/// Elements never removed by class/id classification.
const NEVER_REMOVED: &[&str] = &["html", "body", "article"];

/// Descendants that stop a `<div>` from being read as a paragraph.
pub const DIV_TO_P_BLOCKERS: &[&str] = &[
    "a", "blockquote", "dl", "div", "img", "ol", "p", "pre", "table", "ul", "select",
];

/// Run every preprocessing step on the tree under `root`, in order.
pub fn preprocess(root: &NodeRef, options: &Options, state: &mut ExtractionState) {
    if options.collapse_br_runs {
        collapse_br_runs(root);
    }
    remove_unlikely_candidates(root, &options.patterns);
    normalize_divs(root, state);
}

/// The rest of a `<br>` chain starting at `first`: whitespace text and
/// further `<br>`s up to the last `<br>`. Empty when `first` stands alone.
fn br_chain_tail<'a>(first: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut tail = Vec::new();
    let mut pending = Vec::new();
    let mut next = first.next_sibling();
    while let Some(node) = next {
        if dom::is_whitespace_text(&node) {
            pending.push(node);
        } else if dom::is_tag(&node, "br") {
            tail.append(&mut pending);
            tail.push(node);
        } else {
            break;
        }
        next = node.next_sibling();
    }
    tail
}

fn starts_br_chain(node: &NodeRef) -> bool {
    dom::is_tag(node, "br") && !br_chain_tail(node).is_empty()
}

/// Replace each run of two or more `<br>`s with a `<p>` holding the
/// content that follows, up to the next run.
pub fn collapse_br_runs(root: &NodeRef) {
    let mut dropped: HashSet<NodeId> = HashSet::new();
    for br in dom::elements_by_tag(root, &["br"]) {
        if dropped.contains(&br.id) {
            continue;
        }
        let tail = br_chain_tail(&br);
        if tail.is_empty() {
            continue;
        }
        for node in &tail {
            dropped.insert(node.id);
            dom::remove(node);
        }

        let paragraph = dom::create_element(&br, "p");
        dom::replace_node(&br, &paragraph);

        let mut next = paragraph.next_sibling();
        while let Some(sibling) = next {
            if starts_br_chain(&sibling) {
                break;
            }
            next = sibling.next_sibling();
            dom::append_child(&paragraph, &sibling);
        }
    }
}

/// Drop scripts, styles and elements whose class/id marks them as page
/// furniture.
pub fn remove_unlikely_candidates(root: &NodeRef, patterns: &Patterns) {
    dom::visit_unremoved(&dom::descendant_elements(root), |node| {
        if dom::has_tag(node, ALWAYS_REMOVED) {
            dom::remove(node);
            return true;
        }
        if dom::has_tag(node, NEVER_REMOVED) {
            return false;
        }
        let class_and_id = dom::class_and_id(node);
        if !patterns.is_unlikely_candidate(&class_and_id) {
            return false;
        }
        debug!(
            tag = dom::tag_name(node).unwrap_or_default(),
            class_and_id = %class_and_id,
            "removing unlikely candidate"
        );
        dom::remove(node);
        true
    });
}

/// Non-blank text nodes at any depth under `div`, in document order,
/// except those held by an element from [`DIV_TO_P_BLOCKERS`].
fn loose_text<'a>(div: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = div.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.is_text() {
            if !dom::is_blank(&node) {
                found.push(node);
            }
        } else if !dom::has_tag(&node, DIV_TO_P_BLOCKERS) {
            stack.extend(node.children().into_iter().rev());
        }
    }
    found
}

/// Make `<div>`s that act as paragraphs into paragraphs.
///
/// A div with a single non-empty `<p>` below it is replaced by that `<p>`.
/// A div without block-level descendants is renamed to `<p>`. Any other
/// div gets its loose text, direct or nested in inline elements, wrapped
/// in synthetic `<p>`s.
pub fn normalize_divs(root: &NodeRef, state: &mut ExtractionState) {
    dom::visit_unremoved(&dom::elements_by_tag(root, &["div"]), |div| {
        let paragraphs = dom::elements_by_tag(div, &["p"]);
        if let [only] = paragraphs.as_slice() {
            if !dom::is_blank(only) {
                dom::replace_node(div, only);
                return true;
            }
        }

        if dom::count_elements(div, DIV_TO_P_BLOCKERS) == 0 {
            dom::rename(div, "p");
            return false;
        }

        for text in loose_text(div) {
            let wrapper = dom::wrap(&text, "p");
            state.mark_synthetic(wrapper.id);
        }
        false
    });
}
