//! Page type for running text queries against one laid-out page.

use textsel_core::{
    BBox, HitOptions, SearchMatch, SelectionError, TextPage, copy_selection, highlight, search,
    search_matches,
};

/// A single page of a document.
///
/// Wraps the page's [`TextPage`] together with its number and size. All query
/// methods take `&self`, so one page can serve many concurrent queries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Page index (0-based).
    page_number: usize,
    /// Page width in page units.
    #[cfg_attr(feature = "serde", serde(default))]
    width: f64,
    /// Page height in page units.
    #[cfg_attr(feature = "serde", serde(default))]
    height: f64,
    /// Laid-out text of this page.
    #[cfg_attr(feature = "serde", serde(flatten))]
    text: TextPage,
}

impl Page {
    /// Create a new page with the given metadata and text.
    pub fn new(page_number: usize, width: f64, height: f64, text: TextPage) -> Self {
        Self {
            page_number,
            width,
            height,
            text,
        }
    }

    /// Returns the page index (0-based).
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the page width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the page height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the page's structured text.
    pub fn text_page(&self) -> &TextPage {
        &self.text
    }

    /// The page bounds as a box, suitable for "select all".
    pub fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width, self.height)
    }

    /// Plain text of the page, one line per text line.
    pub fn extract_text(&self) -> String {
        self.text.text()
    }

    /// Find `needle` and return up to `options.max_hits` hit boxes.
    pub fn search(&self, needle: &str, options: &HitOptions) -> Vec<BBox> {
        search(&self.text, needle, options)
    }

    /// Find every occurrence of `needle` with its text and hit boxes.
    pub fn search_matches(&self, needle: &str) -> Vec<SearchMatch> {
        search_matches(&self.text, needle)
    }

    /// Highlight boxes for the chars touched by `rect`.
    pub fn highlight(&self, rect: BBox, options: &HitOptions) -> Vec<BBox> {
        highlight(&self.text, rect, options)
    }

    /// Text of the chars touched by `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the output buffer cannot be allocated.
    pub fn copy_selection(&self, rect: BBox) -> Result<String, SelectionError> {
        copy_selection(&self.text, rect)
    }
}
