//! Line-box clustering: merge character boxes into per-line highlight boxes.
//!
//! Search, highlight and copy all turn a run of character boxes into the
//! smallest set of rectangles a viewer should paint. Consecutive boxes are
//! merged while they share the same top edge and sit within
//! [`LINE_GAP_TOLERANCE`] of each other horizontally.

use crate::geometry::BBox;

/// Maximum horizontal distance between the accumulated box's right edge and
/// the next char's left edge for the two to share a line box.
pub const LINE_GAP_TOLERANCE: f64 = 5.0;

/// Cap on the number of rectangles a search or highlight query returns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOptions {
    /// Maximum number of rectangles returned (default: 500).
    pub max_hits: usize,
}

impl Default for HitOptions {
    fn default() -> Self {
        Self { max_hits: 500 }
    }
}

/// Fixed-capacity output buffer for hit rectangles.
///
/// Wraps caller-owned storage. Pushes beyond capacity are dropped, so the
/// producer can keep scanning without checking for room.
#[derive(Debug)]
pub struct HitSink<'a> {
    hits: &'a mut [BBox],
    len: usize,
}

impl<'a> HitSink<'a> {
    pub fn new(hits: &'a mut [BBox]) -> Self {
        Self { hits, len: 0 }
    }

    /// Store `bbox` if there is room. Returns `false` if it was dropped.
    pub fn push(&mut self, bbox: BBox) -> bool {
        match self.hits.get_mut(self.len) {
            Some(slot) => {
                *slot = bbox;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Number of rectangles written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.hits.len()
    }
}

/// Streaming line-box accumulator.
///
/// Feed char boxes with [`push`](LineBoxes::push) and close the run with
/// [`finish`](LineBoxes::finish). Each caller decides when to start a fresh
/// accumulator: once per search match, once per line for highlighting.
#[derive(Debug, Clone, Copy)]
pub struct LineBoxes {
    current: BBox,
}

impl Default for LineBoxes {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBoxes {
    pub fn new() -> Self {
        Self {
            current: BBox::EMPTY,
        }
    }

    /// Add one char box. Empty boxes are ignored.
    ///
    /// If the box starts a new visual segment the previous accumulated box is
    /// emitted through `emit`.
    pub fn push(&mut self, bbox: BBox, mut emit: impl FnMut(BBox)) {
        if bbox.is_empty() {
            return;
        }
        if self.current.is_empty()
            || bbox.top != self.current.top
            || (bbox.x0 - self.current.x1).abs() > LINE_GAP_TOLERANCE
        {
            if !self.current.is_empty() {
                emit(self.current);
            }
            self.current = bbox;
        } else {
            self.current = self.current.union(&bbox);
        }
    }

    /// Emit the pending box, if any, and reset.
    pub fn finish(&mut self, mut emit: impl FnMut(BBox)) {
        if !self.current.is_empty() {
            emit(self.current);
        }
        self.current = BBox::EMPTY;
    }
}

/// Cluster an ordered sequence of char boxes into line boxes.
pub fn cluster_line_boxes(boxes: impl IntoIterator<Item = BBox>) -> Vec<BBox> {
    let mut out = Vec::new();
    let mut acc = LineBoxes::new();
    for bbox in boxes {
        acc.push(bbox, |b| out.push(b));
    }
    acc.finish(|b| out.push(b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x0: f64, top: f64) -> BBox {
        BBox::new(x0, top, x0 + 10.0, top + 12.0)
    }

    #[test]
    fn adjacent_chars_merge() {
        let out = cluster_line_boxes([cell(0.0, 0.0), cell(10.0, 0.0), cell(20.0, 0.0)]);
        assert_eq!(out, vec![BBox::new(0.0, 0.0, 30.0, 12.0)]);
    }

    #[test]
    fn gap_at_threshold_still_merges() {
        let out = cluster_line_boxes([cell(0.0, 0.0), cell(15.0, 0.0)]);
        assert_eq!(out, vec![BBox::new(0.0, 0.0, 25.0, 12.0)]);
    }

    #[test]
    fn gap_over_threshold_splits() {
        let out = cluster_line_boxes([cell(0.0, 0.0), cell(15.5, 0.0)]);
        assert_eq!(out, vec![cell(0.0, 0.0), cell(15.5, 0.0)]);
    }

    #[test]
    fn backwards_jump_splits() {
        // Distance is measured in both directions.
        let out = cluster_line_boxes([cell(100.0, 0.0), cell(0.0, 0.0)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn different_top_splits() {
        let out = cluster_line_boxes([cell(0.0, 0.0), cell(10.0, 0.5)]);
        assert_eq!(out, vec![cell(0.0, 0.0), cell(10.0, 0.5)]);
    }

    #[test]
    fn empty_boxes_are_skipped() {
        let out = cluster_line_boxes([cell(0.0, 0.0), BBox::EMPTY, cell(10.0, 0.0)]);
        assert_eq!(out, vec![BBox::new(0.0, 0.0, 20.0, 12.0)]);
    }

    #[test]
    fn no_boxes_no_output() {
        assert!(cluster_line_boxes(std::iter::empty()).is_empty());
        assert!(cluster_line_boxes([BBox::EMPTY, BBox::EMPTY]).is_empty());
    }

    #[test]
    fn taller_char_extends_line_box() {
        let tall = BBox::new(10.0, 0.0, 20.0, 20.0);
        let out = cluster_line_boxes([cell(0.0, 0.0), tall]);
        assert_eq!(out, vec![BBox::new(0.0, 0.0, 20.0, 20.0)]);
    }

    #[test]
    fn hit_options_default_cap() {
        assert_eq!(HitOptions::default(), HitOptions { max_hits: 500 });
    }

    #[test]
    fn hit_sink_drops_past_capacity() {
        let mut storage = [BBox::EMPTY; 2];
        let mut sink = HitSink::new(&mut storage);
        assert!(sink.is_empty());
        assert!(sink.push(cell(0.0, 0.0)));
        assert!(sink.push(cell(10.0, 0.0)));
        assert!(sink.is_full());
        assert!(!sink.push(cell(20.0, 0.0)));
        assert_eq!(sink.len(), 2);
        assert_eq!(storage, [cell(0.0, 0.0), cell(10.0, 0.0)]);
    }

    #[test]
    fn zero_capacity_sink() {
        let mut storage: [BBox; 0] = [];
        let mut sink = HitSink::new(&mut storage);
        assert!(sink.is_full());
        let mut acc = LineBoxes::new();
        acc.push(cell(0.0, 0.0), |b| {
            sink.push(b);
        });
        acc.finish(|b| {
            assert!(!sink.push(b));
        });
        assert_eq!(sink.len(), 0);
    }
}
