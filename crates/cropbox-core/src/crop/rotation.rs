//! Rotation and scale handling.
//!
//! Quarter turns swap the displayed image's width and height. To keep the
//! rotated image filling the box edge-to-edge it is scaled by the source
//! aspect ratio, and the bounds are re-centred by half the size difference
//! on each axis:
//!
//! ```text
//! rotated extent = (image_height * scale, image_width * scale)
//! dx = (image_height * scale - image_width) / 2
//! dy = (image_width * scale - image_height) / 2
//! ```
//!
//! With the uncapped aspect-ratio scale, `dx` is zero and only the vertical
//! bounds move. Half turns and the identity restore the initial bounds.

use log::debug;

use super::layout::ImageLayout;
use super::types::{Corner, RotationAngle};
use super::Cropper;
use crate::config::CropperConfig;
use crate::geometry::{clamp_saturating, Bounds};

/// Display scale applied to a quarter-turned image.
///
/// The source aspect ratio, optionally capped so the rotated height
/// (`image_width * scale`) does not exceed `max_height`.
pub(crate) fn quarter_turn_scale(config: &CropperConfig, layout: &ImageLayout) -> f64 {
    let scale = layout.aspect_ratio;
    if config.cap_rotated_height && layout.image_width > 0.0 {
        scale.min(config.max_height / layout.image_width)
    } else {
        scale
    }
}

/// Bounds of a quarter-turned image displayed at `scale`.
pub(crate) fn quarter_turn_bounds(layout: &ImageLayout, scale: f64) -> Bounds {
    let dx = (layout.image_height * scale - layout.image_width) / 2.0;
    let dy = (layout.image_width * scale - layout.image_height) / 2.0;
    layout.initial_bounds.shifted(dx, dy)
}

impl Cropper {
    /// Rotate to `angle` (absolute, not relative to the current rotation).
    ///
    /// Bounds change immediately; handles, rotation and scale animate.
    pub fn rotate(&mut self, angle: RotationAngle) {
        let duration = self.config.animation_ms;

        self.rotation = angle;
        self.rotation_display.animate_to(f64::from(angle.degrees()), duration);

        if !angle.is_orthogonal() {
            self.scale.animate_to(1.0, duration);
            self.bounds = self.layout.initial_bounds;
            self.handles.reset(duration);
            debug!("rotated to {}°, bounds restored", angle.degrees());
            return;
        }

        let scale = quarter_turn_scale(&self.config, &self.layout);
        let bounds = quarter_turn_bounds(&self.layout, scale);
        self.scale.animate_to(scale, duration);
        self.bounds = bounds;

        for corner in Corner::ALL {
            let handle = self.handles.get_mut(corner);
            let y = if corner.is_top() { bounds.top_y } else { bounds.bottom_y };
            let x = clamp_saturating(handle.x.target(), bounds.left_x, bounds.right_x);
            handle.y.animate_to(y, duration);
            handle.x.animate_to(x, duration);
        }

        debug!(
            "rotated to {}° at scale {:.3}, bounds {:?}",
            angle.degrees(),
            scale,
            bounds
        );
    }

    /// Step one quarter turn clockwise from the current rotation.
    ///
    /// Four calls bring the geometry back to the unrotated state.
    pub fn rotate_clockwise(&mut self) {
        self.rotate(self.rotation.clockwise());
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::super::test_support::*;
    use super::*;
    use crate::dimensions::Dimensions;
    use proptest::prelude::*;

    proptest! {
        /// Property: The quarter-turn bounds span exactly the scaled, swapped image.
        #[test]
        fn prop_quarter_turn_extent(
            (w, h) in (1u32..=6000, 1u32..=6000),
            cap in any::<bool>(),
        ) {
            let mut config = CropperConfig::new(400.0, 700.0);
            config.cap_rotated_height = cap;
            let layout = ImageLayout::compute(&config, Dimensions::new(w, h));
            let scale = quarter_turn_scale(&config, &layout);
            let bounds = quarter_turn_bounds(&layout, scale);
            let inset = config.handle.indicator_inset();

            let tol = 1e-6 * (1.0 + layout.image_width.max(layout.image_height) * scale);
            prop_assert!((bounds.span_x() + inset - layout.image_height * scale).abs() < tol);
            prop_assert!((bounds.span_y() + inset - layout.image_width * scale).abs() < tol);
            if cap {
                prop_assert!(layout.image_width * scale <= config.max_height + 1e-9);
            }
        }

        /// Property: Four clockwise turns leave the geometry where it started.
        #[test]
        fn prop_clockwise_round_trip(
            (w, h) in (1u32..=6000, 1u32..=6000),
        ) {
            let config = CropperConfig::new(400.0, 700.0);
            let mut cropper = Cropper::new(config, Dimensions::new(w, h));
            let initial = cropper.bounds();

            for _ in 0..4 {
                cropper.rotate_clockwise();
            }
            cropper.settle();

            prop_assert_eq!(cropper.bounds(), initial);
            prop_assert_eq!(cropper.rotation(), RotationAngle::Deg0);
            prop_assert_eq!(cropper.handle(Corner::TopLeft).x, initial.left_x);
            prop_assert_eq!(cropper.handle(Corner::BottomRight).y, initial.bottom_y);
        }
    }
}
