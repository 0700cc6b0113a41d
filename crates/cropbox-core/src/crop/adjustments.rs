//! Conversion of the on-screen crop to source-image pixels.
//!
//! The crop rectangle is measured between handle positions, which are the
//! top-left corners of the corner indicators. Adding the indicator inset
//! back gives the visual extent. That extent is scaled per axis by
//!
//! ```text
//! ratio = oriented source size / displayed image extent
//! ```
//!
//! where the displayed extent comes from the committed bounds and the
//! source size is swapped for quarter turns. At 0° this is exactly
//! `source / image_width` and `source / image_height`.

use serde::{Deserialize, Serialize};

use super::types::Corner;
use super::Cropper;

/// The final crop/rotate parameters, in source-image pixels.
///
/// A downstream pipeline applies `rotate`, then crops at
/// (`origin_x`, `origin_y`) with `width` x `height`, then mirrors if
/// `flip_horizontal` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    /// Signed degrees, exactly as last requested.
    pub rotate: i32,
    pub flip_horizontal: bool,
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

#[inline]
fn ratio(source: u32, displayed: f64) -> f64 {
    if displayed > 0.0 {
        f64::from(source) / displayed
    } else {
        0.0
    }
}

impl Cropper {
    /// Compute the crop in source-image coordinates from the live handles.
    ///
    /// Handles mid-animation are read as currently displayed. An empty
    /// source yields a zero-sized record.
    pub fn calculate_adjustments(&self) -> Adjustments {
        let inset = self.config.handle.indicator_inset();
        let top_left = self.handle(Corner::TopLeft);
        let top_right = self.handle(Corner::TopRight);
        let bottom_left = self.handle(Corner::BottomLeft);

        let view_width = top_right.x - top_left.x + inset;
        let view_height = bottom_left.y - top_left.y + inset;

        let source = if self.rotation.is_orthogonal() {
            self.layout.source.swapped()
        } else {
            self.layout.source
        };
        let ratio_x = ratio(source.width, self.bounds.span_x() + inset);
        let ratio_y = ratio(source.height, self.bounds.span_y() + inset);

        Adjustments {
            rotate: self.rotation.degrees(),
            flip_horizontal: self.flip_horizontal,
            origin_x: (top_left.x - self.bounds.left_x) * ratio_x,
            origin_y: (top_left.y - self.bounds.top_y) * ratio_y,
            width: view_width * ratio_x,
            height: view_height * ratio_y,
        }
    }

    /// Alias of [`Cropper::calculate_adjustments`].
    pub fn adjustments(&self) -> Adjustments {
        self.calculate_adjustments()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::super::RotationAngle;
    use super::*;
    use crate::config::CropperConfig;
    use crate::dimensions::Dimensions;
    use crate::geometry::Translation;
    use proptest::prelude::*;

    fn corner_strategy() -> impl Strategy<Value = Corner> {
        prop_oneof![
            Just(Corner::TopLeft),
            Just(Corner::TopRight),
            Just(Corner::BottomLeft),
            Just(Corner::BottomRight),
        ]
    }

    fn rotation_strategy() -> impl Strategy<Value = RotationAngle> {
        prop_oneof![
            Just(RotationAngle::Deg0),
            Just(RotationAngle::Deg90),
            Just(RotationAngle::Deg180),
            Just(RotationAngle::NegDeg90),
            Just(RotationAngle::NegDeg270),
        ]
    }

    fn edited_cropper(
        (w, h): (u32, u32),
        rotation: RotationAngle,
        drags: &[(Corner, f64, f64)],
    ) -> Cropper {
        let mut cropper = Cropper::new(CropperConfig::new(400.0, 700.0), Dimensions::new(w, h));
        cropper.rotate(rotation);
        cropper.settle();
        for &(corner, dx, dy) in drags {
            cropper.begin_drag(corner);
            cropper.drag(Translation::new(dx, dy));
            cropper.end_drag();
        }
        cropper
    }

    proptest! {
        /// Property: The crop never leaves the oriented source image.
        #[test]
        fn prop_crop_within_source(
            dims in (500u32..=2000, 500u32..=2000),
            rotation in rotation_strategy(),
            drags in prop::collection::vec((corner_strategy(), -500f64..=500.0, -500f64..=500.0), 0..6),
        ) {
            let cropper = edited_cropper(dims, rotation, &drags);
            let adj = cropper.calculate_adjustments();
            let source = if rotation.is_orthogonal() {
                Dimensions::new(dims.1, dims.0)
            } else {
                Dimensions::new(dims.0, dims.1)
            };

            let tol = 1e-6 * f64::from(source.width.max(source.height));
            prop_assert!(adj.origin_x >= -tol && adj.origin_y >= -tol);
            prop_assert!(adj.width > 0.0 && adj.height > 0.0);
            prop_assert!(adj.origin_x + adj.width <= f64::from(source.width) + tol);
            prop_assert!(adj.origin_y + adj.height <= f64::from(source.height) + tol);
        }

        /// Property: Resetting once or twice gives the same full-image crop.
        #[test]
        fn prop_reset_idempotent(
            dims in (500u32..=2000, 500u32..=2000),
            rotation in rotation_strategy(),
            drags in prop::collection::vec((corner_strategy(), -500f64..=500.0, -500f64..=500.0), 0..6),
        ) {
            let mut cropper = edited_cropper(dims, rotation, &drags);

            cropper.reset();
            cropper.settle();
            let once = cropper.calculate_adjustments();
            cropper.reset();
            cropper.settle();
            let twice = cropper.calculate_adjustments();

            prop_assert_eq!(once, twice);
            prop_assert_eq!(once.rotate, 0);
            let tol = 1e-6 * f64::from(dims.0.max(dims.1));
            prop_assert!((once.width - f64::from(dims.0)).abs() < tol);
            prop_assert!((once.height - f64::from(dims.1)).abs() < tol);
        }
    }
}
