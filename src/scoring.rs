//! Candidate scoring.
//!
//! Every paragraph-like element (`<p>`, `<td>`) with enough text votes for
//! its parent and, at half weight, its grandparent. The containers that
//! collect the most votes are the likely homes of the article body.

use crate::dom::{self, NodeRef};
use crate::extractor::state::Candidates;
use crate::link_density::link_density;
use crate::options::Options;
use crate::patterns::{count_commas, Patterns};

/// Signed weight from the `class` and `id` attributes.
///
/// Each attribute is checked on its own: -25 when it matches the negative
/// vocabulary, +25 when it matches the positive one. Both can apply.
#[must_use]
pub fn class_weight(node: &NodeRef, patterns: &Patterns) -> i32 {
    let mut weight = 0;
    for name in ["class", "id"] {
        let Some(value) = node.attr(name) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if patterns.negative.is_match(&value) {
            weight -= 25;
        }
        if patterns.positive.is_match(&value) {
            weight += 25;
        }
    }
    weight
}

/// Score adjustment for the container's own tag.
#[must_use]
pub fn tag_bonus(tag: &str) -> i32 {
    match tag {
        "article" => 10,
        "section" => 8,
        "div" => 5,
        "pre" | "td" | "blockquote" => 3,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5,
        _ => 0,
    }
}

/// Initial score of a container, computed when it is first referenced.
#[must_use]
pub fn base_score(node: &NodeRef, patterns: &Patterns) -> f64 {
    let mut score = class_weight(node, patterns);
    if let Some(tag) = dom::tag_name(node) {
        score += tag_bonus(&tag);
    }
    // microdata hints
    if dom::has_attribute(node, "itemscope") {
        score += 5;
    }
    if dom::has_attribute(node, "itemtype") {
        score += 30;
    }
    f64::from(score)
}

/// How much one paragraph contributes to its parent.
///
/// `length` is the codepoint count of `text`.
#[must_use]
pub fn content_increment(text: &str, length: usize) -> f64 {
    let commas = count_commas(text) as f64;
    let length_bonus = (length / 100).min(3) as f64;
    1.0 + commas + length_bonus
}

/// Build the candidate table for the (already preprocessed) tree under
/// `root`, with link-density rescaling applied.
#[must_use]
pub fn score_candidates<'a>(root: &NodeRef<'a>, options: &Options) -> Candidates<'a> {
    let patterns = &options.patterns;
    let mut candidates = Candidates::new();

    for paragraph in dom::elements_by_tag(root, &["p", "td"]) {
        let text = dom::text_content(&paragraph);
        let length = text.chars().count();
        if length < options.min_text_length {
            continue;
        }

        let Some(parent) = dom::parent_element(&paragraph) else {
            continue;
        };
        let grandparent = dom::parent_element(&parent);

        candidates.ensure(parent, |n| base_score(n, patterns));
        if let Some(grandparent) = grandparent {
            candidates.ensure(grandparent, |n| base_score(n, patterns));
        }

        let increment = content_increment(&text, length);
        candidates.add(parent.id, increment);
        if let Some(grandparent) = grandparent {
            candidates.add(grandparent.id, increment / 2.0);
        }
    }

    // Good content has a small link density and is barely affected here.
    for candidate in candidates.iter_mut() {
        candidate.score *= 1.0 - link_density(&candidate.node);
    }

    candidates
}
