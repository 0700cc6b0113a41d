//! Display-space geometry primitives.
//!
//! All values here are in display pixels (`f64`), measured from the top-left
//! corner of the cropper's outer box. Conversion to source-image pixels only
//! happens in the adjustment calculator.

mod animated;
mod vector;

use serde::{Deserialize, Serialize};

pub use animated::{smootherstep, AnimatedValue};
pub use vector::Vector2D;

/// A point in display space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cumulative pointer translation since the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// The live limits a crop handle may move within.
///
/// Bounds are always committed synchronously, even while the handles they
/// constrain are still animating towards them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub top_y: f64,
    pub bottom_y: f64,
    pub left_x: f64,
    pub right_x: f64,
}

impl Bounds {
    /// Grow the bounds by `dx` on the left and right and by `dy` on the top
    /// and bottom. Negative values shrink them.
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self {
            top_y: self.top_y - dy,
            bottom_y: self.bottom_y + dy,
            left_x: self.left_x - dx,
            right_x: self.right_x + dx,
        }
    }

    /// Horizontal distance between the left and right limits.
    pub fn span_x(&self) -> f64 {
        self.right_x - self.left_x
    }

    /// Vertical distance between the top and bottom limits.
    pub fn span_y(&self) -> f64 {
        self.bottom_y - self.top_y
    }
}

/// Clamp `value` into `[lo, hi]`, saturating instead of panicking.
///
/// Ranges are resolved from live values and may be momentarily inverted
/// while a neighbouring handle is mid-animation; the upper limit wins then.
#[inline]
pub fn clamp_saturating(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_shifted_grows_both_sides() {
        let bounds = Bounds {
            top_y: 0.0,
            bottom_y: 100.0,
            left_x: 0.0,
            right_x: 200.0,
        };
        let grown = bounds.shifted(10.0, 25.0);

        assert_eq!(grown.top_y, -25.0);
        assert_eq!(grown.bottom_y, 125.0);
        assert_eq!(grown.left_x, -10.0);
        assert_eq!(grown.right_x, 210.0);
        assert_eq!(grown.span_x(), 220.0);
        assert_eq!(grown.span_y(), 150.0);
    }

    #[test]
    fn test_bounds_shifted_zero_is_identity() {
        let bounds = Bounds {
            top_y: -2.0,
            bottom_y: 134.0,
            left_x: -2.0,
            right_x: 284.0,
        };
        assert_eq!(bounds.shifted(0.0, 0.0), bounds);
    }

    #[test]
    fn test_clamp_saturating() {
        assert_eq!(clamp_saturating(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_saturating(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_saturating(50.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_saturating_inverted_range_does_not_panic() {
        // lo > hi happens transiently during animations
        assert_eq!(clamp_saturating(5.0, 10.0, 0.0), 0.0);
    }
}
