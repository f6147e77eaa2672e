//! Linear view of a [`TextPage`] as one addressable character sequence.
//!
//! The stream concatenates every span's characters in document order and
//! appends one [`SEPARATOR`] after each line, including lines with no spans.
//! The separator can never match a search needle, so it acts as a hard line
//! boundary for the matcher.

use crate::geometry::BBox;
use crate::text::{CharAndBox, TextLine, TextPage};

/// Code point of the synthetic per-line separator.
pub const SEPARATOR: char = '\0';

/// Random-access cursor over the linearized characters of a page.
///
/// Construction records the stream offset at which each line starts, so a
/// lookup is a binary search over lines followed by a walk over that line's
/// spans. Results are identical to [`TextPage::char_at`].
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    lines: Vec<&'a TextLine>,
    /// `line_starts[i]` is the stream offset of the first char of `lines[i]`.
    line_starts: Vec<usize>,
    len: usize,
}

impl<'a> CharStream<'a> {
    pub fn new(page: &'a TextPage) -> Self {
        let mut lines = Vec::new();
        let mut line_starts = Vec::new();
        let mut len = 0;
        for line in page.lines() {
            lines.push(line);
            line_starts.push(len);
            len += line.char_count() + 1;
        }
        Self {
            lines,
            line_starts,
            len,
        }
    }

    /// Total stream length: all chars plus one separator per line.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character and box at `idx`; [`CharAndBox::SENTINEL`] for separators
    /// and positions past the end.
    pub fn get(&self, idx: usize) -> CharAndBox {
        if idx >= self.len {
            return CharAndBox::SENTINEL;
        }
        // Last line whose start is <= idx.
        let line_idx = self.line_starts.partition_point(|&start| start <= idx) - 1;
        let mut ofs = idx - self.line_starts[line_idx];
        for span in &self.lines[line_idx].spans {
            if ofs < span.len() {
                return CharAndBox::from(&span.chars[ofs]);
            }
            ofs -= span.len();
        }
        CharAndBox::SENTINEL
    }

    /// Code point at `idx` (`'\0'` for separators and out-of-range).
    pub fn char_at(&self, idx: usize) -> char {
        self.get(idx).c
    }

    /// Bounding box at `idx` ([`BBox::EMPTY`] for separators and out-of-range).
    pub fn bbox_at(&self, idx: usize) -> BBox {
        self.get(idx).bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> TextPage {
        let mut b = TextPage::builder();
        b.block();
        b.line().span(None, 10.0).push_str("ab", 0.0, 0.0, 10.0, 12.0);
        b.span(None, 10.0).push_str("c", 20.0, 0.0, 10.0, 12.0);
        b.line();
        b.block();
        b.line().span(None, 10.0).push_str("de", 0.0, 40.0, 10.0, 12.0);
        b.build()
    }

    #[test]
    fn len_counts_one_separator_per_line() {
        let page = page();
        let stream = CharStream::new(&page);
        // "abc" + sep + sep (empty line) + "de" + sep
        assert_eq!(stream.len(), 8);
        assert!(!stream.is_empty());
    }

    #[test]
    fn empty_page_has_empty_stream() {
        let page = TextPage::default();
        let stream = CharStream::new(&page);
        assert_eq!(stream.len(), 0);
        assert!(stream.is_empty());
        assert_eq!(stream.char_at(0), SEPARATOR);
        assert_eq!(stream.bbox_at(0), BBox::EMPTY);
    }

    #[test]
    fn char_at_crosses_spans_and_blocks() {
        let page = page();
        let stream = CharStream::new(&page);
        let text: String = (0..stream.len())
            .map(|i| match stream.char_at(i) {
                SEPARATOR => '|',
                c => c,
            })
            .collect();
        assert_eq!(text, "abc||de|");
        assert_eq!(stream.bbox_at(2), BBox::new(20.0, 0.0, 30.0, 12.0));
        assert_eq!(stream.bbox_at(3), BBox::EMPTY);
    }

    #[test]
    fn out_of_range_is_sentinel() {
        let page = page();
        let stream = CharStream::new(&page);
        assert_eq!(stream.get(8), CharAndBox::SENTINEL);
        assert_eq!(stream.get(usize::MAX), CharAndBox::SENTINEL);
    }

    #[test]
    fn matches_linear_tree_walk() {
        let page = page();
        let stream = CharStream::new(&page);
        for i in 0..stream.len() + 3 {
            assert_eq!(stream.get(i), page.char_at(i), "position {i}");
        }
    }
}
