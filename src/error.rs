//! Error types for rs-readability.
//!
//! Extraction itself never fails once a document has been built; errors
//! only surface while constructing a [`Document`](crate::Document).

/// Error type for document construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parser produced a tree we cannot extract from.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// Reading the input failed.
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    /// The caller-supplied base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Result type alias for document construction.
pub type Result<T> = std::result::Result<T, Error>;
