//! Selection highlighting: line boxes for every char touched by a rectangle.

use crate::clustering::{HitOptions, HitSink, LineBoxes};
use crate::geometry::BBox;
use crate::text::TextPage;

/// Compute highlight boxes for the chars touched by `rect`, writing into `hits`.
///
/// Chars are tested with the inclusive overlap of [`BBox::touches`]. Boxes
/// are clustered per line: a highlight may span several spans of one line
/// but never two lines. Once `hits` is full further boxes are dropped while
/// the rest of the page is still scanned. Returns the number of boxes
/// written.
pub fn highlight_selection(page: &TextPage, rect: BBox, hits: &mut [BBox]) -> usize {
    let mut sink = HitSink::new(hits);
    for_each_highlight_box(page, rect, |b| {
        sink.push(b);
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(?rect, hits = sink.len(), "highlight_selection");

    sink.len()
}

/// Highlight boxes for `rect`, at most `options.max_hits` of them.
///
/// Like [`highlight_selection`], but the result only grows as boxes are found.
pub fn highlight(page: &TextPage, rect: BBox, options: &HitOptions) -> Vec<BBox> {
    let mut hits = Vec::new();
    for_each_highlight_box(page, rect, |b| {
        if hits.len() < options.max_hits {
            hits.push(b);
        }
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(?rect, hits = hits.len(), "highlight");

    hits
}

fn for_each_highlight_box(page: &TextPage, rect: BBox, mut emit: impl FnMut(BBox)) {
    for line in page.lines() {
        let mut linebox = LineBoxes::new();
        for ch in line.chars() {
            if ch.bbox.touches(&rect) {
                linebox.push(ch.bbox, &mut emit);
            }
        }
        linebox.finish(&mut emit);
    }
}
