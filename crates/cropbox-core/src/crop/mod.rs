//! The crop-geometry engine.
//!
//! A [`Cropper`] owns the four handle positions, the live [`Bounds`] they are
//! clamped to, and the orientation state. Hosts feed it pointer gestures and
//! button presses and read back an [`Adjustments`] record when done.
//!
//! # Coordinate System
//!
//! - Everything except [`Adjustments`] is in display pixels
//! - Handle positions are the top-left corners of the corner indicators
//! - Rotation angles are signed degrees, positive = clockwise on screen
//!
//! # Animation
//!
//! Resets and rotations do not move anything instantly. They set targets on
//! [`AnimatedValue`]s and the host advances them with [`Cropper::tick`].
//! Bounds are the exception: they are committed immediately so that a drag
//! started mid-animation is already clamped to the new limits.

mod adjustments;
mod display;
mod drag;
mod gridlines;
mod layout;
mod rotation;
mod types;

use log::{debug, warn};

use crate::config::CropperConfig;
use crate::dimensions::Dimensions;
use crate::geometry::{AnimatedValue, Bounds, Point, Vector2D};

pub use adjustments::Adjustments;
pub use display::{CropInsets, DisplayState, HandlePositions};
pub use drag::{CropRect, EdgeSelection};
pub use gridlines::Gridlines;
pub use layout::ImageLayout;
pub use types::{CropError, Corner, HorizontalEdge, RotationAngle, VerticalEdge};

use drag::Gesture;

/// The four crop handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handles {
    pub top_left: Vector2D,
    pub top_right: Vector2D,
    pub bottom_left: Vector2D,
    pub bottom_right: Vector2D,
}

impl Handles {
    /// Handles resting on the corners of `bounds`.
    pub fn at_bounds(bounds: &Bounds) -> Self {
        Self {
            top_left: Vector2D::new(bounds.left_x, bounds.top_y),
            top_right: Vector2D::new(bounds.right_x, bounds.top_y),
            bottom_left: Vector2D::new(bounds.left_x, bounds.bottom_y),
            bottom_right: Vector2D::new(bounds.right_x, bounds.bottom_y),
        }
    }

    pub fn get(&self, corner: Corner) -> &Vector2D {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomLeft => &self.bottom_left,
            Corner::BottomRight => &self.bottom_right,
        }
    }

    pub fn get_mut(&mut self, corner: Corner) -> &mut Vector2D {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }

    /// Move each handle's rest position onto the corners of `bounds`.
    fn rebase(&mut self, bounds: &Bounds) {
        for corner in Corner::ALL {
            let x = if corner.is_left() { bounds.left_x } else { bounds.right_x };
            let y = if corner.is_top() { bounds.top_y } else { bounds.bottom_y };
            self.get_mut(corner).rebase(x, y);
        }
    }

    fn reset(&mut self, duration_ms: f64) {
        for corner in Corner::ALL {
            self.get_mut(corner).reset(duration_ms);
        }
    }
}

/// Interactive crop state for one source image.
#[derive(Debug, Clone)]
pub struct Cropper {
    config: CropperConfig,
    layout: ImageLayout,
    bounds: Bounds,
    handles: Handles,
    rotation: RotationAngle,
    rotation_display: AnimatedValue,
    scale: AnimatedValue,
    flip_horizontal: bool,
    gesture: Option<Gesture>,
}

impl Cropper {
    /// Create a cropper for an image of the given natural size.
    ///
    /// Handles start on the corners of the image, so the initial crop is
    /// the full source.
    pub fn new(config: CropperConfig, source: Dimensions) -> Self {
        let layout = ImageLayout::compute(&config, source);
        let bounds = layout.initial_bounds;

        debug!(
            "cropper created for {}x{} source, displayed at {:.1}x{:.1}",
            source.width, source.height, layout.image_width, layout.image_height
        );

        Self {
            config,
            layout,
            bounds,
            handles: Handles::at_bounds(&bounds),
            rotation: RotationAngle::Deg0,
            rotation_display: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(1.0),
            flip_horizontal: false,
            gesture: None,
        }
    }

    /// Replace the source image.
    ///
    /// Layout and rest positions are recomputed for the new size, any
    /// in-progress gesture is discarded and the geometry resets.
    pub fn set_source(&mut self, source: Dimensions) {
        debug!("source changed to {}x{}", source.width, source.height);

        self.layout = ImageLayout::compute(&self.config, source);
        self.handles.rebase(&self.layout.initial_bounds);
        self.gesture = None;
        self.reset();
    }

    /// Restore the full, unrotated, unflipped crop.
    pub fn reset(&mut self) {
        let duration = self.config.animation_ms;

        self.bounds = self.layout.initial_bounds;
        self.handles.reset(duration);
        self.rotation = RotationAngle::Deg0;
        self.rotation_display.animate_to(0.0, duration);
        self.scale.animate_to(1.0, duration);
        self.flip_horizontal = false;

        debug!("cropper reset");
    }

    /// Toggle horizontal mirroring, when enabled in the config.
    ///
    /// Flipping never changes bounds; it is only reported in the
    /// adjustments for the downstream pipeline.
    pub fn flip(&mut self) {
        if !self.config.flip {
            warn!("flip ignored: disabled in config");
            return;
        }
        self.flip_horizontal = !self.flip_horizontal;
    }

    /// Advance all running animations by `dt_ms`.
    ///
    /// Returns `true` while anything is still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let mut moving = false;
        for corner in Corner::ALL {
            moving |= self.handles.get_mut(corner).tick(dt_ms);
        }
        moving |= self.rotation_display.tick(dt_ms);
        moving |= self.scale.tick(dt_ms);
        moving
    }

    /// Jump every animation to its target.
    pub fn settle(&mut self) {
        for corner in Corner::ALL {
            self.handles.get_mut(corner).finish();
        }
        self.rotation_display.finish();
        self.scale.finish();
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn layout(&self) -> &ImageLayout {
        &self.layout
    }

    /// The live handle limits.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    /// Current position of one handle.
    pub fn handle(&self, corner: Corner) -> Point {
        self.handles.get(corner).position()
    }

    /// The last rotation requested.
    pub fn rotation(&self) -> RotationAngle {
        self.rotation
    }

    /// Target display scale for the current rotation.
    pub fn scale(&self) -> f64 {
        self.scale.target()
    }

    pub fn is_flipped(&self) -> bool {
        self.flip_horizontal
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// 1000x500 source in a box whose image area is exactly 300x150.
    pub fn landscape() -> Cropper {
        Cropper::new(CropperConfig::new(302.0, 1000.0), Dimensions::new(1000, 500))
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_places_handles_on_bounds() {
        let cropper = landscape();
        let b = cropper.bounds();

        assert_eq!(cropper.handle(Corner::TopLeft), Point::new(b.left_x, b.top_y));
        assert_eq!(cropper.handle(Corner::TopRight), Point::new(b.right_x, b.top_y));
        assert_eq!(cropper.handle(Corner::BottomLeft), Point::new(b.left_x, b.bottom_y));
        assert_eq!(cropper.handle(Corner::BottomRight), Point::new(b.right_x, b.bottom_y));
        assert_eq!(cropper.rotation(), RotationAngle::Deg0);
        assert_eq!(cropper.scale(), 1.0);
    }

    #[test]
    fn test_reset_animates_home() {
        let mut cropper = landscape();
        cropper.handles.top_left.x.set(40.0);
        cropper.handles.bottom_left.x.set(40.0);

        cropper.reset();
        assert!(cropper.tick(16.0));
        assert!(cropper.handle(Corner::TopLeft).x < 40.0);

        cropper.settle();
        assert!(!cropper.tick(16.0));
        assert_eq!(cropper.handle(Corner::TopLeft).x, -2.0);
        assert_eq!(cropper.handle(Corner::BottomLeft).x, -2.0);
    }

    #[test]
    fn test_tick_eventually_stops() {
        let mut cropper = landscape();
        cropper.rotate(RotationAngle::Deg90);

        let mut frames = 0;
        while cropper.tick(16.0) {
            frames += 1;
            assert!(frames < 100, "animations should finish");
        }
        assert!(frames > 0);
    }

    #[test]
    fn test_flip_disabled_by_default() {
        let mut cropper = landscape();
        cropper.flip();
        assert!(!cropper.is_flipped());
    }

    #[test]
    fn test_flip_toggles_when_enabled() {
        let mut config = CropperConfig::new(302.0, 1000.0);
        config.flip = true;
        let mut cropper = Cropper::new(config, Dimensions::new(1000, 500));
        let bounds = cropper.bounds();

        cropper.flip();
        assert!(cropper.is_flipped());
        assert_eq!(cropper.bounds(), bounds);

        cropper.flip();
        assert!(!cropper.is_flipped());
    }

    #[test]
    fn test_reset_clears_flip() {
        let mut config = CropperConfig::new(302.0, 1000.0);
        config.flip = true;
        let mut cropper = Cropper::new(config, Dimensions::new(1000, 500));

        cropper.flip();
        cropper.reset();
        assert!(!cropper.is_flipped());
    }

    #[test]
    fn test_set_source_rebases_geometry() {
        let mut cropper = landscape();
        cropper.rotate(RotationAngle::Deg90);
        assert!(cropper.begin_drag(Corner::TopLeft));

        cropper.set_source(Dimensions::new(500, 1000));
        cropper.settle();

        assert!(!cropper.is_active());
        assert_eq!(cropper.rotation(), RotationAngle::Deg0);
        assert_eq!(cropper.bounds(), cropper.layout().initial_bounds);
        let b = cropper.bounds();
        assert_eq!(cropper.handle(Corner::BottomRight), Point::new(b.right_x, b.bottom_y));
        assert_eq!(cropper.handles().bottom_right.initial_y, b.bottom_y);
    }
}
