//! textsel: Search, highlight, and copy text from laid-out document pages.
//!
//! This is the public API facade crate for textsel. It re-exports the text
//! model and algorithms from textsel-core and adds page and document types.
//!
//! # Architecture
//!
//! - **textsel-core**: Text model, char stream, line-box clustering, queries
//! - **textsel** (this crate): [`Page`] and [`Document`] with JSON loading and
//!   optional parallel search (`parallel` feature)

mod document;
mod error;
mod page;

pub use document::{Document, PageHits};
pub use error::TextselError;
pub use page::Page;
pub use textsel_core;
pub use textsel_core::{
    BBox, CharAndBox, CharStream, HitOptions, LINE_GAP_TOLERANCE, SearchMatch,
    SelectionError, TextBlock, TextChar, TextLine, TextPage, TextPageBuilder, TextSpan,
};
