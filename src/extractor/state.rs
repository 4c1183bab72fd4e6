//! Extraction state tracking.
//!
//! Per-run bookkeeping shared between the passes: the synthetic paragraphs
//! the preprocessor created, and the candidate score table built by the
//! scorer.

use std::collections::{HashMap, HashSet};

use dom_query::{NodeId, NodeRef};

/// Node-identity state that has to survive from preprocessing to
/// serialization.
#[derive(Debug, Default)]
pub struct ExtractionState {
    /// `<p>` wrappers inserted around loose text; unwrapped on output.
    synthetic_paragraphs: HashSet<NodeId>,
}

impl ExtractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrapper created by the preprocessor.
    pub fn mark_synthetic(&mut self, node_id: NodeId) {
        self.synthetic_paragraphs.insert(node_id);
    }

    /// Whether `node_id` is a preprocessor-made wrapper.
    #[must_use]
    pub fn is_synthetic(&self, node_id: NodeId) -> bool {
        self.synthetic_paragraphs.contains(&node_id)
    }

    /// Number of wrappers created so far.
    #[must_use]
    pub fn synthetic_count(&self) -> usize {
        self.synthetic_paragraphs.len()
    }
}

/// A node considered as the main-content container.
#[derive(Clone, Copy)]
pub struct Candidate<'a> {
    pub node: NodeRef<'a>,
    pub score: f64,
}

/// Candidate table keyed by node identity.
///
/// Entries keep their insertion order so that ties are settled in favour
/// of the candidate seen first.
#[derive(Default)]
pub struct Candidates<'a> {
    entries: Vec<Candidate<'a>>,
    index: HashMap<NodeId, usize>,
}

impl<'a> Candidates<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register `node` if absent, computing its base score once.
    pub fn ensure(&mut self, node: NodeRef<'a>, base_score: impl FnOnce(&NodeRef<'a>) -> f64) {
        if self.index.contains_key(&node.id) {
            return;
        }
        let score = base_score(&node);
        self.index.insert(node.id, self.entries.len());
        self.entries.push(Candidate { node, score });
    }

    /// Add `delta` to an existing candidate. Unknown nodes are ignored.
    pub fn add(&mut self, node_id: NodeId, delta: f64) {
        if let Some(&i) = self.index.get(&node_id) {
            self.entries[i].score += delta;
        }
    }

    /// Current score of `node_id`, if it is a candidate.
    #[must_use]
    pub fn score_of(&self, node_id: NodeId) -> Option<f64> {
        self.index.get(&node_id).map(|&i| self.entries[i].score)
    }

    /// Highest score; on ties the earliest inserted candidate wins.
    #[must_use]
    pub fn best(&self) -> Option<Candidate<'a>> {
        let mut best: Option<Candidate<'a>> = None;
        for candidate in &self.entries {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(*candidate);
            }
        }
        best
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Candidate<'a>> {
        self.entries.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
