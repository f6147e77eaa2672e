//! Error type for the textsel facade.

use textsel_core::SelectionError;
use thiserror::Error;

/// Errors from loading documents and running queries through the facade.
#[derive(Debug, Error)]
pub enum TextselError {
    /// Error reading document data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document JSON could not be parsed or written.
    #[cfg(feature = "serde")]
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A page index past the end of the document was requested.
    #[error("page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    /// A selection query failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl PartialEq for TextselError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                TextselError::PageOutOfRange {
                    index: a,
                    page_count: pa,
                },
                TextselError::PageOutOfRange {
                    index: b,
                    page_count: pb,
                },
            ) => a == b && pa == pb,
            (TextselError::Selection(a), TextselError::Selection(b)) => a == b,
            _ => false,
        }
    }
}
