//! Display layout derived from the natural image size.

use crate::config::CropperConfig;
use crate::dimensions::Dimensions;
use crate::geometry::Bounds;

/// How a source image is fitted into the display box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    /// Natural size of the source image.
    pub source: Dimensions,
    /// Source width over height (0.0 for empty sources).
    pub aspect_ratio: f64,
    /// Displayed image width, borders excluded.
    pub image_width: f64,
    /// Displayed image height, borders excluded.
    pub image_height: f64,
    /// Handle limits at 0° rotation.
    pub initial_bounds: Bounds,
}

impl ImageLayout {
    /// Fit `source` into the box described by `config`.
    ///
    /// The image is never upscaled past its natural width. When the
    /// aspect-preserving height overflows `max_height`, the height is
    /// pinned and the width follows. Empty sources give a zero-sized layout.
    pub fn compute(config: &CropperConfig, source: Dimensions) -> Self {
        let border = config.handle.box_border;
        let aspect_ratio = source.aspect_ratio();

        let (image_width, image_height) = if source.is_empty() {
            (0.0, 0.0)
        } else {
            let mut width = (config.max_width.min(f64::from(source.width)) - 2.0 * border).max(0.0);
            let mut height = width / aspect_ratio;

            if height + 2.0 * border > config.max_height {
                height = (config.max_height - 2.0 * border).max(0.0);
                width = height * aspect_ratio;
            }
            (width, height)
        };

        Self {
            source,
            aspect_ratio,
            image_width,
            image_height,
            initial_bounds: initial_bounds(config, image_width, image_height),
        }
    }

    /// Outer size of the display box, borders included.
    pub fn box_size(&self, config: &CropperConfig) -> (f64, f64) {
        let border = 2.0 * config.handle.box_border;
        (self.image_width + border, self.image_height + border)
    }
}

fn initial_bounds(config: &CropperConfig, image_width: f64, image_height: f64) -> Bounds {
    let h = &config.handle;
    let near = h.box_border - h.indicator_border;
    let far = h.indicator_border + h.box_border - h.indicator_size;

    Bounds {
        top_y: near,
        bottom_y: image_height + far,
        left_x: near,
        right_x: image_width + far,
    }
}
