//! Link density measurement.
//!
//! Navigation blocks and "related links" lists can be as text-heavy as an
//! article body; the share of their text that sits inside hyperlinks is
//! what gives them away.

use crate::dom::{self, NodeRef};

/// Whether an anchor points somewhere. Empty and `#` hrefs are ignored.
fn is_real_link(anchor: &NodeRef) -> bool {
    anchor
        .attr("href")
        .is_some_and(|href| !href.is_empty() && &*href != "#")
}

/// Text length inside real links below `node`.
#[must_use]
pub fn link_text_length(node: &NodeRef) -> usize {
    dom::elements_by_tag(node, &["a"])
        .iter()
        .filter(|a| is_real_link(a))
        .map(dom::text_length)
        .sum()
}

/// Ratio of linked text to all text of `node`, in `[0, 1]`.
///
/// Returns 0 for a node without text.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_length(node);
    if text_length == 0 {
        return 0.0;
    }
    let ratio = link_text_length(node) as f64 / text_length as f64;
    ratio.min(1.0)
}
