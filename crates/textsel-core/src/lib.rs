//! textsel-core: Backend-independent text model and selection algorithms.
//!
//! This crate provides the structured text model (page, block, line, span,
//! char with bounding boxes) and the three read-only queries a document viewer
//! runs against it: needle search, selection highlighting and selection copy.
//! All queries share one line-box clustering routine and never mutate the page,
//! so any number of them can run concurrently over the same [`TextPage`].

pub mod clustering;
pub mod copy;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod search;
pub mod stream;
pub mod text;

pub use clustering::{HitOptions, HitSink, LINE_GAP_TOLERANCE, LineBoxes, cluster_line_boxes};
pub use copy::{CONTROL_PLACEHOLDER, copy_selection};
pub use error::SelectionError;
pub use geometry::BBox;
pub use highlight::{highlight, highlight_selection};
pub use search::{SearchMatch, fold_case, match_at, search, search_matches, search_page};
pub use stream::{CharStream, SEPARATOR};
pub use text::{CharAndBox, TextBlock, TextChar, TextLine, TextPage, TextPageBuilder, TextSpan};
