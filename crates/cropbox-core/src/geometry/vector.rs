//! Two-dimensional animatable positions with a rest coordinate.

use super::{AnimatedValue, Point};

/// A crop handle position.
///
/// `x` and `y` are the live, animatable coordinates. `initial_x` and
/// `initial_y` are the un-rotated rest position: the reset target and the
/// reference for the crop-box insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: AnimatedValue,
    pub y: AnimatedValue,
    pub initial_x: f64,
    pub initial_y: f64,
}

impl Vector2D {
    /// Create a handle resting at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: AnimatedValue::new(x),
            y: AnimatedValue::new(y),
            initial_x: x,
            initial_y: y,
        }
    }

    /// Current position (possibly mid-tween).
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Ease back to the rest position.
    pub fn reset(&mut self, duration_ms: f64) {
        self.x.animate_to(self.initial_x, duration_ms);
        self.y.animate_to(self.initial_y, duration_ms);
    }

    /// Replace the rest position without moving the live coordinates.
    pub fn rebase(&mut self, initial_x: f64, initial_y: f64) {
        self.initial_x = initial_x;
        self.initial_y = initial_y;
    }

    /// Advance both coordinates. Returns `true` while either is moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let moving_x = self.x.tick(dt_ms);
        let moving_y = self.y.tick(dt_ms);
        moving_x || moving_y
    }

    pub fn finish(&mut self) {
        self.x.finish();
        self.y.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rests_at_initial() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.position(), Point::new(3.0, 4.0));
        assert_eq!(v.initial_x, 3.0);
        assert_eq!(v.initial_y, 4.0);
    }

    #[test]
    fn test_reset_returns_home() {
        let mut v = Vector2D::new(0.0, 0.0);
        v.x.set(50.0);
        v.y.set(-20.0);
        v.reset(300.0);
        assert!(v.tick(100.0));
        v.finish();
        assert_eq!(v.position(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rebase_keeps_live_position() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.rebase(10.0, 20.0);
        assert_eq!(v.position(), Point::new(1.0, 1.0));
        v.reset(0.0);
        assert_eq!(v.position(), Point::new(10.0, 20.0));
    }
}
