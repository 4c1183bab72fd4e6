//! Compiled regex patterns used by the extraction heuristics.
//!
//! The defaults are compiled once using `LazyLock`. A [`Patterns`] value
//! bundles cheap clones of them so each session carries its own immutable
//! table, and callers can swap a pattern through [`Options`](crate::Options)
//! without touching any global.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate Classification Patterns
// =============================================================================

/// class/id values that are always removed before scoring.
pub static BLACKLIST_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)popupbody").expect("BLACKLIST_CANDIDATES regex")
});

/// class/id values that look like page furniture.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|hidden|disqus|modal|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Overrides [`UNLIKELY_CANDIDATES`]: the element may still hold content.
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow").expect("MAYBE_CANDIDATE regex")
});

// =============================================================================
// Class Weight Patterns
// =============================================================================

/// Boilerplate vocabulary, -25 per matching attribute.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|com-|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE regex")
});

/// Content vocabulary, +25 per matching attribute.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE regex")
});

// =============================================================================
// Text Patterns
// =============================================================================

/// A period followed by whitespace or the end of the text.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\s|$)").expect("SENTENCE_END regex"));

/// Runs of whitespace that contain no line break.
pub static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\r\n\f]+").expect("INLINE_WHITESPACE regex"));

/// Line-break runs together with the blanks around them.
pub static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\r\n\f]*[\r\n\f][\s]*").expect("LINE_BREAKS regex"));

/// Separators between an article title and the site name, in priority order.
pub const TITLE_SEPARATORS: &[&str] = &[" | ", " _ ", " - ", "«", "»", "—"];

/// Commas counted by the scorer: ASCII and full-width.
pub const COMMAS: &[char] = &[',', '，'];

/// Count comma-like characters in `text`.
#[must_use]
pub fn count_commas(text: &str) -> usize {
    text.chars().filter(|c| COMMAS.contains(c)).count()
}

/// Per-session pattern table.
///
/// `Regex` clones share the compiled program, so building this from the
/// statics costs a handful of reference-count bumps.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Always-remove class/id pattern.
    pub blacklist: Regex,
    /// Probably-boilerplate class/id pattern.
    pub unlikely: Regex,
    /// Rescues elements matched by `unlikely`.
    pub maybe_candidate: Regex,
    /// Negative class weight signal.
    pub negative: Regex,
    /// Positive class weight signal.
    pub positive: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            blacklist: BLACKLIST_CANDIDATES.clone(),
            unlikely: UNLIKELY_CANDIDATES.clone(),
            maybe_candidate: MAYBE_CANDIDATE.clone(),
            negative: NEGATIVE.clone(),
            positive: POSITIVE.clone(),
        }
    }
}

impl Patterns {
    /// Whether a concatenated class+id string marks an element for removal.
    #[must_use]
    pub fn is_unlikely_candidate(&self, class_and_id: &str) -> bool {
        self.blacklist.is_match(class_and_id)
            || (self.unlikely.is_match(class_and_id)
                && !self.maybe_candidate.is_match(class_and_id))
    }
}
