//! Content extraction pipeline.
//!
//! Runs the passes in their fixed order over one document tree:
//! preprocess, score, select, prune, serialize. The tree is mutated in
//! place, so a pipeline runs at most once per document.

use tracing::debug;
use url::Url;

use crate::dom::{self, NodeId, NodeRef};
use crate::options::Options;
use crate::scoring::score_candidates;
use crate::selector::select_content;
use crate::serialize::{raw, serialize};

use super::preprocess::preprocess;
use super::pruning::prune_selection;
use super::state::ExtractionState;

/// Output of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct Content {
    /// Sanitized markup.
    pub html: String,
    /// Plain text rendering of the same nodes.
    pub text: String,
    /// Selected nodes that survived pruning, in document order.
    pub nodes: Vec<NodeId>,
}

/// Extract the main content of the tree under `root`.
#[must_use]
pub fn extract_content(root: &NodeRef, options: &Options, base: Option<&Url>) -> Content {
    let mut state = ExtractionState::new();

    preprocess(root, options, &mut state);
    debug!(
        synthetic_paragraphs = state.synthetic_count(),
        "preprocessing done"
    );

    let candidates = score_candidates(root, options);
    let selection = select_content(root, &candidates);
    debug!(
        candidates = candidates.len(),
        best = dom::tag_name(&selection.best).unwrap_or_default(),
        best_class_and_id = dom::class_and_id(&selection.best),
        best_score = selection.best_score,
        selected = selection.nodes.len(),
        "selected content"
    );

    let before_pruning = raw(&selection.nodes);

    prune_selection(&selection.nodes, options);
    let survivors: Vec<NodeRef> = selection
        .nodes
        .iter()
        .copied()
        .filter(|node| dom::is_attached(node, root.id))
        .collect();

    let mut output = serialize(&survivors, &state, options, base);
    if output.is_empty() {
        debug!("sanitized content is empty, using unfiltered markup");
        output = before_pruning;
    }

    Content {
        html: output.html,
        text: output.text,
        nodes: survivors.iter().map(|node| node.id).collect(),
    }
}
