/// Bounding box with top-left origin coordinate system.
///
/// Coordinates are in page units:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
///
/// A box with no area is *empty*. [`BBox::EMPTY`] is the canonical empty value
/// and is what the char stream hands out for line separators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    /// The distinguished "no area" rectangle.
    pub const EMPTY: BBox = BBox {
        x0: 0.0,
        top: 0.0,
        x1: 0.0,
        bottom: 0.0,
    };

    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns `true` if the box covers no area.
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.bottom <= self.top
    }

    /// Returns `true` if either axis is reversed (`x1 < x0` or `bottom < top`).
    pub fn is_inverted(&self) -> bool {
        self.x1 < self.x0 || self.bottom < self.top
    }

    /// Compute the union of two bounding boxes.
    ///
    /// An empty operand contributes nothing, so `EMPTY.union(&b) == b`.
    pub fn union(&self, other: &BBox) -> BBox {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Inclusive overlap test against a selection rectangle.
    ///
    /// Touching edges count as overlap. An inverted `query` never overlaps
    /// anything.
    pub fn touches(&self, query: &BBox) -> bool {
        if query.is_inverted() {
            return false;
        }
        self.x1 >= query.x0
            && self.x0 <= query.x1
            && self.bottom >= query.top
            && self.top <= query.bottom
    }
}
