//! Multi-page document: an ordered set of [`Page`]s plus cross-page search.

#[cfg(feature = "serde")]
use std::path::Path;

use textsel_core::{BBox, HitOptions};

use crate::error::TextselError;
use crate::page::Page;

/// Hit boxes found on one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageHits {
    /// Position of the page in the document (0-based).
    pub page_index: usize,
    /// Hit boxes in stream order, capped per page by `max_hits`.
    pub rects: Vec<BBox>,
}

/// A document made of laid-out pages.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    #[cfg_attr(feature = "serde", serde(default))]
    pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Parse a document from its JSON form (`{"pages": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`TextselError::Json`] if the input is not a valid document.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, TextselError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TextselError::Io`] if the file cannot be read, or
    /// [`TextselError::Json`] if it does not hold a valid document.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TextselError> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TextselError::Json`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, TextselError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Return the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`TextselError::PageOutOfRange`] if `index` is not a page.
    pub fn page(&self, index: usize) -> Result<&Page, TextselError> {
        self.pages.get(index).ok_or(TextselError::PageOutOfRange {
            index,
            page_count: self.pages.len(),
        })
    }

    /// Search every page for `needle`.
    ///
    /// Pages without hits are omitted. `options.max_hits` applies per page.
    /// Pages are identified by position, not by their stored `page_number`.
    pub fn search(&self, needle: &str, options: &HitOptions) -> Vec<PageHits> {
        self.pages
            .iter()
            .enumerate()
            .filter_map(|(index, page)| page_hits(index, page, needle, options))
            .collect()
    }

    /// Search every page for `needle` in parallel using rayon.
    ///
    /// Results are ordered by page index and equal to [`Document::search`].
    #[cfg(feature = "parallel")]
    pub fn search_parallel(&self, needle: &str, options: &HitOptions) -> Vec<PageHits> {
        use rayon::prelude::*;

        self.pages
            .par_iter()
            .enumerate()
            .filter_map(|(index, page)| page_hits(index, page, needle, options))
            .collect()
    }
}

fn page_hits(
    page_index: usize,
    page: &Page,
    needle: &str,
    options: &HitOptions,
) -> Option<PageHits> {
    let rects = page.search(needle, options);
    if rects.is_empty() {
        None
    } else {
        Some(PageHits {
            page_index,
            rects,
        })
    }
}
