//! Structured text model: Page → Blocks → Lines → Spans → Chars.
//!
//! The model is produced by a layout engine and is read-only for every query
//! in this crate. Each level is an owned, indexable `Vec` in reading order.

use crate::geometry::BBox;

/// A single laid-out character: its code point and final bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextChar {
    /// Unicode code point.
    pub c: char,
    /// Bounding box in page coordinates.
    pub bbox: BBox,
}

impl TextChar {
    pub fn new(c: char, bbox: BBox) -> Self {
        Self { c, bbox }
    }
}

/// A run of characters sharing one font/style context.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    /// Characters in visual order. Never empty in a built page.
    pub chars: Vec<TextChar>,
    /// Font name, if the layout engine reported one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font: Option<String>,
    /// Font size in page units.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: f64,
}

impl TextSpan {
    /// Number of characters in this span.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The span's characters as a `String`.
    pub fn text(&self) -> String {
        self.chars.iter().map(|ch| ch.c).collect()
    }
}

/// One visual line, possibly composed of several spans.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLine {
    #[cfg_attr(feature = "serde", serde(default))]
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    /// Number of characters across all spans (the separator is not counted).
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(TextSpan::len).sum()
    }

    /// Iterate over the line's characters in order, across spans.
    pub fn chars(&self) -> impl Iterator<Item = &TextChar> {
        self.spans.iter().flat_map(|span| span.chars.iter())
    }

    /// The line's text with spans concatenated.
    pub fn text(&self) -> String {
        self.chars().map(|ch| ch.c).collect()
    }
}

/// A layout region such as a paragraph or a column.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
    #[cfg_attr(feature = "serde", serde(default))]
    pub lines: Vec<TextLine>,
}

/// A code point paired with its bounding box, as returned by stream lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharAndBox {
    pub c: char,
    pub bbox: BBox,
}

impl CharAndBox {
    /// The separator / out-of-range value: `'\0'` with an empty box.
    pub const SENTINEL: CharAndBox = CharAndBox {
        c: crate::stream::SEPARATOR,
        bbox: BBox::EMPTY,
    };
}

impl From<&TextChar> for CharAndBox {
    fn from(ch: &TextChar) -> Self {
        Self {
            c: ch.c,
            bbox: ch.bbox,
        }
    }
}

/// Laid-out text of a single page.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks: Vec<TextBlock>,
}

impl TextPage {
    pub fn new(blocks: Vec<TextBlock>) -> Self {
        Self { blocks }
    }

    /// Start building a page block by block.
    pub fn builder() -> TextPageBuilder {
        TextPageBuilder::default()
    }

    /// Iterate over every line in document order.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.blocks.iter().flat_map(|block| block.lines.iter())
    }

    /// Iterate over every character in document order (no separators).
    pub fn chars(&self) -> impl Iterator<Item = &TextChar> {
        self.lines().flat_map(TextLine::chars)
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|block| block.lines.len()).sum()
    }

    /// Number of characters on the page (no separators).
    pub fn char_count(&self) -> usize {
        self.lines().map(TextLine::char_count).sum()
    }

    /// Look up position `idx` of the linear char stream by walking the tree.
    ///
    /// Every line is followed by one separator. Separator and out-of-range
    /// positions return [`CharAndBox::SENTINEL`]. This is O(page size); use
    /// [`CharStream`](crate::stream::CharStream) for repeated lookups.
    pub fn char_at(&self, idx: usize) -> CharAndBox {
        let mut ofs = 0;
        for line in self.lines() {
            for span in &line.spans {
                if idx < ofs + span.len() {
                    return CharAndBox::from(&span.chars[idx - ofs]);
                }
                ofs += span.len();
            }
            if idx == ofs {
                return CharAndBox::SENTINEL;
            }
            ofs += 1;
        }
        CharAndBox::SENTINEL
    }

    /// Plain text of the whole page, one line per [`TextLine`].
    pub fn text(&self) -> String {
        self.lines()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Incremental builder for [`TextPage`].
///
/// `block()`, `line()` and `span()` each open a new container at their level;
/// missing parents are opened implicitly. Empty spans are dropped by
/// [`build`](TextPageBuilder::build).
#[derive(Debug, Default)]
pub struct TextPageBuilder {
    blocks: Vec<TextBlock>,
}

impl TextPageBuilder {
    /// Open a new block.
    pub fn block(&mut self) -> &mut Self {
        self.blocks.push(TextBlock::default());
        self
    }

    /// Open a new line in the current block.
    pub fn line(&mut self) -> &mut Self {
        if self.blocks.is_empty() {
            self.block();
        }
        if let Some(block) = self.blocks.last_mut() {
            block.lines.push(TextLine::default());
        }
        self
    }

    /// Open a new span in the current line.
    pub fn span(&mut self, font: Option<&str>, size: f64) -> &mut Self {
        if self.current_line().is_none() {
            self.line();
        }
        if let Some(line) = self.current_line() {
            line.spans.push(TextSpan {
                chars: Vec::new(),
                font: font.map(str::to_string),
                size,
            });
        }
        self
    }

    /// Append a character to the current span.
    pub fn push_char(&mut self, c: char, bbox: BBox) -> &mut Self {
        if self.current_line().is_none_or(|line| line.spans.is_empty()) {
            self.span(None, 0.0);
        }
        if let Some(span) = self
            .current_line()
            .and_then(|line| line.spans.last_mut())
        {
            span.chars.push(TextChar::new(c, bbox));
        }
        self
    }

    /// Append `text` to the current span with fixed-advance boxes.
    ///
    /// Characters are laid left-to-right starting at `x0`, each `advance`
    /// wide and `height` tall, all sharing the same `top`.
    pub fn push_str(
        &mut self,
        text: &str,
        x0: f64,
        top: f64,
        advance: f64,
        height: f64,
    ) -> &mut Self {
        for (i, c) in text.chars().enumerate() {
            let left = x0 + advance * i as f64;
            self.push_char(c, BBox::new(left, top, left + advance, top + height));
        }
        self
    }

    pub fn build(&mut self) -> TextPage {
        let mut blocks = std::mem::take(&mut self.blocks);
        for line in blocks.iter_mut().flat_map(|block| block.lines.iter_mut()) {
            line.spans.retain(|span| !span.is_empty());
        }
        TextPage { blocks }
    }

    fn current_line(&mut self) -> Option<&mut TextLine> {
        self.blocks.last_mut().and_then(|block| block.lines.last_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_line_page() -> TextPage {
        let mut b = TextPage::builder();
        b.block();
        b.line().span(Some("Helvetica"), 10.0).push_str("AB", 0.0, 0.0, 10.0, 12.0);
        b.line().span(Some("Helvetica"), 10.0).push_str("CD", 0.0, 20.0, 10.0, 12.0);
        b.build()
    }

    #[test]
    fn builder_lays_out_chars() {
        let page = two_line_page();
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.line_count(), 2);
        assert_eq!(page.char_count(), 4);
        let first = &page.blocks[0].lines[0].spans[0];
        assert_eq!(first.font.as_deref(), Some("Helvetica"));
        assert_eq!(first.chars[1].bbox, BBox::new(10.0, 0.0, 20.0, 12.0));
    }

    #[test]
    fn builder_opens_missing_parents() {
        let page = TextPage::builder()
            .push_char('x', BBox::new(0.0, 0.0, 5.0, 5.0))
            .build();
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.blocks[0].lines.len(), 1);
        assert_eq!(page.blocks[0].lines[0].spans[0].text(), "x");
    }

    #[test]
    fn builder_drops_empty_spans_but_keeps_empty_lines() {
        let mut b = TextPage::builder();
        b.line().span(None, 0.0);
        b.line().span(None, 0.0).push_str("a", 0.0, 0.0, 5.0, 5.0);
        let page = b.build();
        assert_eq!(page.line_count(), 2);
        assert!(page.blocks[0].lines[0].spans.is_empty());
        assert_eq!(page.blocks[0].lines[1].spans.len(), 1);
    }

    #[test]
    fn char_at_walks_tree_with_separators() {
        let page = two_line_page();
        assert_eq!(page.char_at(0).c, 'A');
        assert_eq!(page.char_at(1).c, 'B');
        assert_eq!(page.char_at(2), CharAndBox::SENTINEL);
        assert_eq!(page.char_at(3).c, 'C');
        assert_eq!(page.char_at(3).bbox, BBox::new(0.0, 20.0, 10.0, 32.0));
        assert_eq!(page.char_at(5), CharAndBox::SENTINEL);
        assert_eq!(page.char_at(6), CharAndBox::SENTINEL);
        assert_eq!(page.char_at(1000), CharAndBox::SENTINEL);
    }

    #[test]
    fn char_at_counts_separator_for_empty_line() {
        let mut b = TextPage::builder();
        b.line();
        b.line().push_str("z", 0.0, 0.0, 5.0, 5.0);
        let page = b.build();
        assert_eq!(page.char_at(0), CharAndBox::SENTINEL);
        assert_eq!(page.char_at(1).c, 'z');
    }

    #[test]
    fn page_text_joins_lines() {
        assert_eq!(two_line_page().text(), "AB\nCD");
        assert_eq!(TextPage::default().text(), "");
    }
}
