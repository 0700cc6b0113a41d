//! Rule-of-thirds overlay geometry.

use serde::{Deserialize, Serialize};

use super::types::Corner;
use super::Cropper;

/// Gridline offsets inside the crop box, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gridlines {
    /// Distances of the two horizontal lines from the top handle row.
    pub horizontal: [f64; 2],
    /// Distances of the two vertical lines from the left handle column.
    pub vertical: [f64; 2],
    /// Box height over box width; 0.0 for a collapsed box.
    pub aspect: f64,
    /// Lines are only shown while a gesture is in progress.
    pub visible: bool,
}

impl Gridlines {
    /// Thirds of the box spanned by the given handle coordinates.
    pub fn for_box(top_y: f64, bottom_y: f64, left_x: f64, right_x: f64, visible: bool) -> Self {
        let height = bottom_y - top_y;
        let width = right_x - left_x;
        Self {
            horizontal: [height / 3.0, height * 2.0 / 3.0],
            vertical: [width / 3.0, width * 2.0 / 3.0],
            aspect: if width > 0.0 { height / width } else { 0.0 },
            visible,
        }
    }
}

impl Cropper {
    /// Overlay geometry for the current crop box, if gridlines are enabled.
    pub fn gridlines(&self) -> Option<Gridlines> {
        if !self.config.gridlines {
            return None;
        }
        let top_left = self.handle(Corner::TopLeft);
        Some(Gridlines::for_box(
            top_left.y,
            self.handle(Corner::BottomLeft).y,
            top_left.x,
            self.handle(Corner::TopRight).x,
            self.is_active(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::CropperConfig;
    use crate::dimensions::Dimensions;

    #[test]
    fn test_thirds() {
        let g = Gridlines::for_box(0.0, 90.0, 0.0, 300.0, true);
        assert_eq!(g.horizontal, [30.0, 60.0]);
        assert_eq!(g.vertical, [100.0, 200.0]);
        assert_eq!(g.aspect, 0.3);
        assert!(g.visible);
    }

    #[test]
    fn test_aspect_is_height_over_width() {
        // Not bottom - (top / width)
        let g = Gridlines::for_box(10.0, 110.0, 0.0, 50.0, false);
        assert_eq!(g.aspect, 2.0);
    }

    #[test]
    fn test_collapsed_box() {
        let g = Gridlines::for_box(5.0, 5.0, 7.0, 7.0, false);
        assert_eq!(g.aspect, 0.0);
        assert_eq!(g.vertical, [0.0, 0.0]);
    }

    #[test]
    fn test_visible_only_during_gesture() {
        let mut cropper = landscape();
        assert!(!cropper.gridlines().unwrap().visible);

        assert!(cropper.begin_drag(Corner::TopLeft));
        assert!(cropper.gridlines().unwrap().visible);

        cropper.end_drag();
        assert!(!cropper.gridlines().unwrap().visible);
    }

    #[test]
    fn test_disabled_in_config() {
        let mut config = CropperConfig::new(302.0, 1000.0);
        config.gridlines = false;
        let cropper = Cropper::new(config, Dimensions::new(1000, 500));
        assert!(cropper.gridlines().is_none());
    }
}
