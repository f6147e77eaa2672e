//! Error types for textsel-core.
//!
//! Queries are total over any [`TextPage`](crate::TextPage): empty needles,
//! empty pages and selections that miss every char produce empty results, not
//! errors. The one failure surfaced to callers is running out of memory while
//! growing the copied-text buffer.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error returned by selection queries that allocate their output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The output buffer could not be grown.
    #[error("out of memory while building selection text: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
