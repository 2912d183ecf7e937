//! Axis-aligned 2D rectangle in layout units.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in layout units.
///
/// Layout coordinates grow right (X) and **down** (Y), so `bottom()`
/// returns the larger Y value.
///
/// # Example
///
/// ```
/// use dieline_types::Rect;
///
/// let r = Rect::new(10.0, 20.0, 100.0, 60.0);
/// assert_eq!(r.right(), 110.0);
/// assert_eq!(r.bottom(), 80.0);
/// assert_eq!(r.center().x, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge (smallest Y).
    pub y: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (y + height) in layout convention, where Y grows down.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Bounding rectangle of an iterator of rectangles.
    ///
    /// Returns a zero-sized rectangle at the origin for an empty iterator.
    #[must_use]
    pub fn from_rects<'a>(mut rects: impl Iterator<Item = &'a Self>) -> Self {
        let Some(first) = rects.next() else {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        };
        rects.fold(*first, |acc, r| acc.union(r))
    }

    /// Check whether an X coordinate falls within the horizontal span,
    /// expanded by `tolerance` on both sides.
    #[inline]
    #[must_use]
    pub fn spans_x(&self, x: f64, tolerance: f64) -> bool {
        x >= self.x - tolerance && x <= self.right() + tolerance
    }
}
