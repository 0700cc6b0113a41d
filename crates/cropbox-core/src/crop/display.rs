//! Per-frame render snapshot for the host.

use serde::{Deserialize, Serialize};

use super::types::Corner;
use super::Cropper;
use crate::geometry::Point;

/// Positions of the four handles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlePositions {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

/// Crop box edges measured inwards from the handles' rest positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub image_width: f64,
    pub image_height: f64,
    /// Animated rotation, in degrees.
    pub rotation: f64,
    /// Animated scale.
    pub scale: f64,
    pub flip_horizontal: bool,
    pub handles: HandlePositions,
    pub crop_box: CropInsets,
    /// Offset of the in-box image so it lines up with the dimmed background.
    pub focused_image_offset: Point,
}

impl Cropper {
    /// Snapshot the current (possibly mid-animation) display geometry.
    pub fn display_state(&self) -> DisplayState {
        let top_left = self.handles.top_left;
        let bottom_right = self.handles.bottom_right;

        let crop_box = CropInsets {
            top: top_left.y.value() - top_left.initial_y,
            left: top_left.x.value() - top_left.initial_x,
            bottom: bottom_right.initial_y - bottom_right.y.value(),
            right: bottom_right.initial_x - bottom_right.x.value(),
        };

        DisplayState {
            image_width: self.layout.image_width,
            image_height: self.layout.image_height,
            rotation: self.rotation_display.value(),
            scale: self.scale.value(),
            flip_horizontal: self.flip_horizontal,
            handles: HandlePositions {
                top_left: self.handle(Corner::TopLeft),
                top_right: self.handle(Corner::TopRight),
                bottom_left: self.handle(Corner::BottomLeft),
                bottom_right: self.handle(Corner::BottomRight),
            },
            crop_box,
            focused_image_offset: Point::new(-crop_box.left, -crop_box.top),
        }
    }
}
