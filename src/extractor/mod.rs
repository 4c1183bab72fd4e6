//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `preprocess`: `<br>` run collapse, unlikely-candidate removal, div normalization
//! - `state`: per-run state (synthetic paragraphs, candidate table)
//! - `pruning`: header/widget removal and conditional cleaning of the selection
//! - `pipeline`: runs every pass in order
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::{dom, extractor, Options};
//!
//! let doc = dom::parse("<html><body><div><p>Some text that is long enough to be scored.</p></div></body></html>");
//! let content = extractor::extract_content(&doc.root(), &Options::default(), None);
//! assert!(content.text.contains("long enough"));
//! ```

pub mod pipeline;
pub mod preprocess;
pub mod pruning;
pub mod state;

pub use pipeline::{extract_content, Content};
pub use state::{Candidate, Candidates, ExtractionState};
