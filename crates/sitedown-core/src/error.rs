//! Error types for sitedown

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sitedown operations
#[derive(Error, Debug)]
pub enum SitedownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A delimiter occurs an odd number of times in a span of text
    #[error("Malformed inline markup: unterminated `{delimiter}` in {text:?}")]
    MalformedInlineMarkup {
        /// The delimiter that was left open
        delimiter: String,
        /// The text being split
        text: String,
    },

    /// Unknown span kind name
    #[error("Invalid span kind: {0}")]
    InvalidSpanKind(String),

    /// A fenced code block was still open at end of input
    #[error("Unterminated code fence starting at {snippet:?}")]
    UnterminatedCodeFence {
        /// First line of the unclosed block
        snippet: String,
    },

    /// A node or span is missing a field needed for rendering
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// The document has no level-1 heading to use as a title
    #[error("No title found: the document has no `# ` heading")]
    NoTitleFound,

    /// Failure while generating a single page
    #[error("Failed to generate page from {}: {source}", path.display())]
    Page {
        /// Source document
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<SitedownError>,
    },
}

impl SitedownError {
    /// Attach the offending document path to an error.
    pub fn in_page(self, path: impl Into<PathBuf>) -> Self {
        match self {
            page @ SitedownError::Page { .. } => page,
            other => SitedownError::Page {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type alias for sitedown operations
pub type Result<T> = std::result::Result<T, SitedownError>;
