//! Cropbox WASM - WebAssembly bindings for the crop engine
//!
//! This crate exposes cropbox-core to JavaScript/TypeScript hosts that draw
//! the image, handles and gridlines themselves.
//!
//! # Module Structure
//!
//! - `cropper` - The interactive [`JsCropper`] engine
//! - `dimensions` - Natural image size resolution from fetched bytes
//! - `logger` - Routes `log` records to the browser console via `console_log`
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropper, resolve_dimensions } from '@cropbox/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await (await fetch(uri)).arrayBuffer());
//! const { width, height } = resolve_dimensions({ uri }, bytes);
//! const cropper = new JsCropper({ maxWidth: 360, maxHeight: 640 }, width, height);
//!
//! cropper.beginDrag('topLeft');
//! cropper.drag(30, 15);
//! cropper.endDrag();
//! console.log(cropper.calculateAdjustments());
//! ```

use std::fmt::Display;

use wasm_bindgen::prelude::*;

mod cropper;
mod dimensions;
mod logger;

pub use cropper::JsCropper;
pub use dimensions::resolve_dimensions;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Set the console log level ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logger::init(logger::parse_level(level));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn to_js_error(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
