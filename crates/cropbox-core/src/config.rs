//! Cropper configuration.
//!
//! A single parameterised engine replaces the separate cropper variants:
//! flip support, the gridline overlay and the rotated-height cap are all
//! plain flags here. Hosts usually build this from a JSON-like object, so
//! every field has a serde default.

use serde::{Deserialize, Serialize};

/// Default tween length for resets and rotations, in milliseconds.
pub const DEFAULT_ANIMATION_MS: f64 = 300.0;

/// Visual dimensions of the crop box and its corner handles.
///
/// Handles are square indicator boxes with a border on two sides; their
/// size and border thickness feed directly into the bounds and the
/// adjustment calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandleGeometry {
    /// Border width of the crop box outline.
    pub box_border: f64,
    /// Side length of a corner indicator box.
    pub indicator_size: f64,
    /// Border width of a corner indicator.
    pub indicator_border: f64,
}

impl HandleGeometry {
    /// Interior of an indicator box that lies inside the crop rectangle.
    ///
    /// Handle positions are the indicators' top-left corners, so this inset
    /// has to be added back to handle distances to get crop extents.
    #[inline]
    pub fn indicator_inset(&self) -> f64 {
        self.indicator_size - 2.0 * self.indicator_border
    }
}

impl Default for HandleGeometry {
    fn default() -> Self {
        Self {
            box_border: 1.0,
            indicator_size: 20.0,
            indicator_border: 3.0,
        }
    }
}

/// Configuration for a [`crate::Cropper`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropperConfig {
    /// Maximum width of the display box, borders included.
    pub max_width: f64,
    /// Maximum height of the display box, borders included.
    pub max_height: f64,
    /// Produce rule-of-thirds gridlines while a gesture is active.
    pub gridlines: bool,
    /// Honour `flip()` requests.
    pub flip: bool,
    /// Cap the quarter-turn scale so the rotated image fits `max_height`.
    pub cap_rotated_height: bool,
    /// Tween length for resets and rotations.
    pub animation_ms: f64,
    pub handle: HandleGeometry,
}

impl CropperConfig {
    /// Create a config for a display box of the given size.
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
            ..Self::default()
        }
    }
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            max_width: 360.0,
            max_height: 640.0,
            gridlines: true,
            flip: false,
            cap_rotated_height: false,
            animation_ms: DEFAULT_ANIMATION_MS,
            handle: HandleGeometry::default(),
        }
    }
}
