//! Pointer position to value mapping.

use crate::layout::Rect;
use crate::range::Range;

/// Horizontal extent of a laid-out track, in pointer coordinates.
///
/// The default is a zero-width track at the origin, which is what a slider
/// sees before its first render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub left: f64,
    pub width: f64,
}

impl TrackBounds {
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Bounds of a track drawn one glyph per terminal cell.
    ///
    /// The first cell maps to `min` and the last cell maps to `max`, so the
    /// usable width is one less than the cell count.
    pub fn from_cells(rect: Rect) -> Self {
        Self {
            left: f64::from(rect.x),
            width: f64::from(rect.width.saturating_sub(1)),
        }
    }

    /// Whether the track has been laid out with a usable width.
    pub fn is_laid_out(&self) -> bool {
        self.width > 0.0 && self.width.is_finite()
    }

    /// Fraction of the track to the left of `pointer_x`, clamped to `[0, 1]`.
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if !self.is_laid_out() {
            return 0.0;
        }
        let fraction = (pointer_x - self.left) / self.width;
        if fraction.is_nan() {
            return 0.0;
        }
        fraction.clamp(0.0, 1.0)
    }
}

/// Map a pointer position on a track to a clamped, quantized value.
pub fn value_at(pointer_x: f64, bounds: TrackBounds, range: &Range) -> f64 {
    let fraction = bounds.fraction_at(pointer_x);
    range.snap(range.value_at_fraction(fraction))
}
