//! Text search with position: find needle occurrences and return their line boxes.
//!
//! Matching rules:
//! - ASCII letters compare case-insensitively via [`fold_case`]; every other
//!   code point must match exactly.
//! - A space in the needle matches a whole run of one or more spaces on the
//!   page.
//! - Matches never cross a line: the stream separator matches nothing.

use crate::clustering::{HitOptions, HitSink, LineBoxes};
use crate::geometry::BBox;
use crate::stream::{CharStream, SEPARATOR};
use crate::text::TextPage;

/// One occurrence of the needle in the char stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchMatch {
    /// The page text covered by the match, as it appears on the page.
    pub text: String,
    /// Stream offset of the first matched char.
    pub start: usize,
    /// Number of stream positions consumed. At least the needle length;
    /// more when a needle space absorbed a run of page spaces.
    pub len: usize,
    /// Line boxes covering the matched chars.
    pub rects: Vec<BBox>,
}

/// Fold ASCII `A`–`Z` to `a`–`z`; all other code points are returned as-is.
///
/// Folding is deliberately limited to ASCII. Full Unicode case folding would
/// change which occurrences are found.
pub fn fold_case(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Try to match `needle` at stream position `pos`.
///
/// Returns the number of stream positions consumed, or 0 if there is no match
/// at `pos`.
pub fn match_at(stream: &CharStream<'_>, needle: &str, pos: usize) -> usize {
    let mut n = pos;
    for c in needle.chars() {
        if c == ' ' && stream.char_at(n) == ' ' {
            while stream.char_at(n) == ' ' {
                n += 1;
            }
        } else {
            let sc = stream.char_at(n);
            if sc == SEPARATOR || fold_case(c) != fold_case(sc) {
                return 0;
            }
            n += 1;
        }
    }
    n - pos
}

/// Visit every match of `needle`, in stream order, as `(start, consumed_len)`.
///
/// Every start offset is tried, so overlapping occurrences are all reported.
fn for_each_match(stream: &CharStream<'_>, needle: &str, mut visit: impl FnMut(usize, usize)) {
    for pos in 0..stream.len() {
        let n = match_at(stream, needle, pos);
        if n > 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(start = pos, len = n, "search match");
            visit(pos, n);
        }
    }
}

/// Search `page` for `needle`, writing line boxes into `hits`.
///
/// Each occurrence contributes the line boxes of its matched chars, clustered
/// with a fresh accumulator. Once `hits` is full further boxes are dropped,
/// but the whole page is still scanned. Returns the number of boxes written.
pub fn search_page(page: &TextPage, needle: &str, hits: &mut [BBox]) -> usize {
    let mut sink = HitSink::new(hits);
    for_each_hit_box(page, needle, |b| {
        sink.push(b);
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(
        needle_chars = needle.chars().count(),
        hits = sink.len(),
        "search_page"
    );

    sink.len()
}

/// Search `page` for `needle`, returning at most `options.max_hits` boxes.
///
/// The result grows with the hits actually found, so a huge `max_hits` costs
/// nothing up front.
pub fn search(page: &TextPage, needle: &str, options: &HitOptions) -> Vec<BBox> {
    let mut hits = Vec::new();
    for_each_hit_box(page, needle, |b| {
        if hits.len() < options.max_hits {
            hits.push(b);
        }
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(
        needle_chars = needle.chars().count(),
        hits = hits.len(),
        "search"
    );

    hits
}

/// Emit the line boxes of every occurrence of `needle`, uncapped.
fn for_each_hit_box(page: &TextPage, needle: &str, mut emit: impl FnMut(BBox)) {
    if needle.is_empty() {
        return;
    }

    let stream = CharStream::new(page);
    for_each_match(&stream, needle, |start, len| {
        let mut linebox = LineBoxes::new();
        for i in start..start + len {
            linebox.push(stream.bbox_at(i), &mut emit);
        }
        linebox.finish(&mut emit);
    });
}

/// Search `page` for `needle`, returning every occurrence with its line boxes.
///
/// Unlike [`search`] there is no cap, and occurrences are kept apart.
pub fn search_matches(page: &TextPage, needle: &str) -> Vec<SearchMatch> {
    if needle.is_empty() {
        return Vec::new();
    }

    let stream = CharStream::new(page);
    let mut results = Vec::new();

    for_each_match(&stream, needle, |start, len| {
        let mut rects = Vec::new();
        let mut linebox = LineBoxes::new();
        for i in start..start + len {
            linebox.push(stream.bbox_at(i), |b| rects.push(b));
        }
        linebox.finish(|b| rects.push(b));

        results.push(SearchMatch {
            text: (start..start + len).map(|i| stream.char_at(i)).collect(),
            start,
            len,
            rects,
        });
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(matches = results.len(), "search_matches");

    results
}
