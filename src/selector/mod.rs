//! Content Selection
//!
//! Picks the top candidate and gathers the siblings that belong with it:
//! preambles, paragraphs split off by ads that were removed, and sibling
//! containers that scored nearly as well.

use crate::dom::{self, NodeRef};
use crate::extractor::state::Candidates;
use crate::link_density::link_density;
use crate::patterns::SENTENCE_END;

/// Siblings never need more than this score to be admitted.
const MIN_SIBLING_THRESHOLD: f64 = 10.0;

/// Share of the best score a sibling candidate must reach.
const SIBLING_SCORE_RATIO: f64 = 0.2;

/// Length separating "long" from "short" sibling paragraphs.
const LONG_PARAGRAPH: usize = 80;

/// Link density a long sibling paragraph must stay under.
const LONG_PARAGRAPH_MAX_DENSITY: f64 = 0.25;

/// The admitted nodes, in document order, plus the winner they grew from.
pub struct ContentSelection<'a> {
    pub best: NodeRef<'a>,
    pub best_score: f64,
    pub nodes: Vec<NodeRef<'a>>,
}

/// Score a sibling must reach to be admitted on its own merit.
#[must_use]
pub fn sibling_threshold(best_score: f64) -> f64 {
    MIN_SIBLING_THRESHOLD.max(best_score * SIBLING_SCORE_RATIO)
}

/// The node used when no candidate exists: `<body>`, else the first
/// element of the document, else the document itself.
fn last_resort<'a>(root: &NodeRef<'a>) -> NodeRef<'a> {
    dom::find_first(root, "body")
        .or_else(|| dom::descendant_elements(root).into_iter().next())
        .unwrap_or(*root)
}

/// Whether a `<p>` sibling reads like part of the article.
fn is_related_paragraph(node: &NodeRef) -> bool {
    if !dom::is_tag(node, "p") {
        return false;
    }
    let density = link_density(node);
    let text = dom::text_content(node);
    let length = text.chars().count();

    if length >= LONG_PARAGRAPH {
        density < LONG_PARAGRAPH_MAX_DENSITY
    } else {
        density == 0.0 && SENTENCE_END.is_match(&text)
    }
}

/// Decide whether `sibling` joins the content.
#[must_use]
pub fn admit_sibling(
    sibling: &NodeRef,
    best: &NodeRef,
    candidates: &Candidates,
    threshold: f64,
) -> bool {
    if sibling.id == best.id {
        return true;
    }
    if candidates
        .score_of(sibling.id)
        .is_some_and(|score| score >= threshold)
    {
        return true;
    }
    is_related_paragraph(sibling)
}

/// Choose the best candidate under `root` and assemble the final list.
#[must_use]
pub fn select_content<'a>(root: &NodeRef<'a>, candidates: &Candidates<'a>) -> ContentSelection<'a> {
    let (best, best_score) = match candidates.best() {
        Some(candidate) => (candidate.node, candidate.score),
        None => (last_resort(root), 0.0),
    };

    let Some(parent) = best.parent() else {
        return ContentSelection {
            best,
            best_score,
            nodes: vec![best],
        };
    };

    let threshold = sibling_threshold(best_score);
    let nodes = dom::element_children(&parent)
        .into_iter()
        .filter(|sibling| admit_sibling(sibling, &best, candidates, threshold))
        .collect();

    ContentSelection {
        best,
        best_score,
        nodes,
    }
}
