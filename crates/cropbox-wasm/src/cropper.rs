//! Crop engine bindings.
//!
//! [`JsCropper`] wraps the core engine for a host UI. The host forwards
//! pointer gestures and frame ticks, then renders from
//! [`JsCropper::display_state`]. Structured values cross the boundary via
//! `serde_wasm_bindgen`.

use cropbox_core::{Corner, Cropper, CropperConfig, Dimensions, Point, RotationAngle, Translation};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Interactive crop box for one source image.
#[wasm_bindgen]
pub struct JsCropper {
    inner: Cropper,
}

impl JsCropper {
    fn from_parts(config: CropperConfig, width: u32, height: u32) -> Self {
        Self {
            inner: Cropper::new(config, Dimensions::new(width, height)),
        }
    }
}

#[wasm_bindgen]
impl JsCropper {
    /// Create a cropper for a `width x height` source image.
    ///
    /// `config` may be `undefined` for the defaults; any field left out
    /// falls back to its default.
    ///
    /// # Example (TypeScript)
    ///
    /// ```typescript
    /// const cropper = new JsCropper({ maxWidth: 360, maxHeight: 640 }, 4000, 3000);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, width: u32, height: u32) -> Result<JsCropper, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid cropper config: {}", e)))?
        };
        Ok(Self::from_parts(config, width, height))
    }

    /// Replace the source image and re-layout from scratch.
    #[wasm_bindgen(js_name = setSource)]
    pub fn set_source(&mut self, width: u32, height: u32) {
        self.inner.set_source(Dimensions::new(width, height));
    }

    /// Restore the full-image crop, unrotated and unflipped.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Rotate to an absolute angle in degrees (0, ±90, ±180, ±270).
    pub fn rotate(&mut self, degrees: i32) -> Result<(), JsValue> {
        let angle = RotationAngle::try_from(degrees).map_err(to_js_error)?;
        self.inner.rotate(angle);
        Ok(())
    }

    /// Step one quarter turn clockwise.
    #[wasm_bindgen(js_name = rotateClockwise)]
    pub fn rotate_clockwise(&mut self) {
        self.inner.rotate_clockwise();
    }

    /// Toggle horizontal flip.
    pub fn flip(&mut self) {
        self.inner.flip();
    }

    /// Current rotation in signed degrees.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.rotation().degrees()
    }

    #[wasm_bindgen(getter, js_name = isFlipped)]
    pub fn is_flipped(&self) -> bool {
        self.inner.is_flipped()
    }

    /// Source-pixel crop parameters for the current box.
    ///
    /// # Returns
    ///
    /// `{ rotate, flipHorizontal, originX, originY, width, height }`
    #[wasm_bindgen(js_name = calculateAdjustments)]
    pub fn calculate_adjustments(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.calculate_adjustments()).map_err(to_js_error)
    }

    /// Alias of [`JsCropper::calculate_adjustments`].
    #[wasm_bindgen(js_name = getAdjustments)]
    pub fn get_adjustments(&self) -> Result<JsValue, JsValue> {
        self.calculate_adjustments()
    }

    /// Start dragging a corner handle (`"topLeft"`, `"bottomRight"`, ...).
    ///
    /// Returns false if another gesture is already in progress.
    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, corner: &str) -> Result<bool, JsValue> {
        let corner: Corner = corner.parse().map_err(to_js_error)?;
        Ok(self.inner.begin_drag(corner))
    }

    /// Start dragging the box body at a pointer position in box space.
    ///
    /// A pointer in the centre third moves nothing. Returns false if another
    /// gesture is already in progress.
    #[wasm_bindgen(js_name = beginBoxDrag)]
    pub fn begin_box_drag(&mut self, x: f64, y: f64) -> bool {
        self.inner.begin_box_drag(Point::new(x, y))
    }

    /// Apply the cumulative translation since the gesture began.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.inner.drag(Translation::new(dx, dy));
    }

    #[wasm_bindgen(js_name = endDrag)]
    pub fn end_drag(&mut self) {
        self.inner.end_drag();
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_active()
    }

    /// Advance animations by `dt_ms`. Returns true while anything is moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.inner.tick(dt_ms)
    }

    /// Jump every animation to its target.
    pub fn settle(&mut self) {
        self.inner.settle();
    }

    /// Everything the host needs to draw the current frame.
    #[wasm_bindgen(js_name = displayState)]
    pub fn display_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.display_state()).map_err(to_js_error)
    }

    /// Gridline offsets for the current box, or `null` when disabled.
    pub fn gridlines(&self) -> Result<JsValue, JsValue> {
        match self.inner.gridlines() {
            Some(lines) => serde_wasm_bindgen::to_value(&lines).map_err(to_js_error),
            None => Ok(JsValue::NULL),
        }
    }
}
