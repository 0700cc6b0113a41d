//! Image size resolution bindings.
//!
//! Browsers cannot probe a URI synchronously, so the host fetches the bytes
//! itself and hands them over. Sources that already carry a width and
//! height never need the bytes.

use cropbox_core::dimensions::{probe_bytes, resolve_dimensions as core_resolve};
use cropbox_core::{DimensionError, Dimensions, ImageSource, SizeProbe};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Probes using bytes the host already fetched for the source URI.
struct FetchedBytes<'a>(Option<&'a [u8]>);

impl SizeProbe for FetchedBytes<'_> {
    fn probe(&self, uri: &str) -> Result<Dimensions, DimensionError> {
        let unavailable = |reason: String| DimensionError::Unavailable {
            uri: uri.to_string(),
            reason,
        };
        let bytes = self
            .0
            .ok_or_else(|| unavailable("no image data supplied".to_string()))?;

        probe_bytes(bytes).map_err(|DimensionError::Unavailable { reason, .. }| unavailable(reason))
    }
}

fn resolve(source: &ImageSource, bytes: Option<&[u8]>) -> Result<Dimensions, DimensionError> {
    core_resolve(source, &FetchedBytes(bytes))
}

/// Resolve the natural size of an image source.
///
/// # Arguments
///
/// * `source` - `{ uri?: string, width?: number, height?: number }`
/// * `bytes` - Encoded image data fetched from `uri`, if any
///
/// # Returns
///
/// `{ width, height }`.
///
/// # Errors
///
/// Throws if the source has no dimensions and no URI, or if the bytes are
/// missing or not a recognised image. Hosts should fall back to `0 x 0` and
/// show an empty state.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await (await fetch(uri)).arrayBuffer());
/// const { width, height } = resolve_dimensions({ uri }, bytes);
/// ```
#[wasm_bindgen]
pub fn resolve_dimensions(source: JsValue, bytes: Option<Vec<u8>>) -> Result<JsValue, JsValue> {
    let source: ImageSource = serde_wasm_bindgen::from_value(source)
        .map_err(|e| JsValue::from_str(&format!("Invalid image source: {}", e)))?;

    let dims = resolve(&source, bytes.as_deref()).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&dims).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropbox_core::dimensions::MISSING_URI;

    // 1x1 grayscale PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00, 0x3A,
        0x7E, 0x9B, 0x55, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x60,
        0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x48, 0xAF, 0xA4, 0x71, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_explicit_dimensions_need_no_bytes() {
        let source = ImageSource {
            uri: None,
            width: Some(800),
            height: Some(600),
        };
        assert_eq!(resolve(&source, None).unwrap(), Dimensions::new(800, 600));
    }

    #[test]
    fn test_missing_uri_unavailable() {
        let err = resolve(&ImageSource::default(), Some(TINY_PNG)).unwrap_err();
        let DimensionError::Unavailable { uri, reason } = err;
        assert!(uri.is_empty());
        assert_eq!(reason, MISSING_URI);
    }

    #[test]
    fn test_uri_without_bytes_unavailable() {
        let err = resolve(&ImageSource::from_uri("https://example.com/a.png"), None).unwrap_err();
        let DimensionError::Unavailable { uri, reason } = err;
        assert_eq!(uri, "https://example.com/a.png");
        assert_eq!(reason, "no image data supplied");
    }

    #[test]
    fn test_uri_with_bytes_probed() {
        let dims = resolve(&ImageSource::from_uri("a.png"), Some(TINY_PNG)).unwrap();
        assert_eq!(dims, Dimensions::new(1, 1));
    }

    #[test]
    fn test_bad_bytes_keep_uri() {
        let err = resolve(&ImageSource::from_uri("a.png"), Some(&[1, 2, 3])).unwrap_err();
        let DimensionError::Unavailable { uri, .. } = err;
        assert_eq!(uri, "a.png");
    }
}

/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestSource {
        uri: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }

    #[wasm_bindgen_test]
    fn test_resolve_explicit_dimensions() {
        let source = serde_wasm_bindgen::to_value(&TestSource {
            uri: None,
            width: Some(1000),
            height: Some(500),
        })
        .unwrap();

        let dims: Dimensions =
            serde_wasm_bindgen::from_value(resolve_dimensions(source, None).unwrap()).unwrap();
        assert_eq!(dims, Dimensions::new(1000, 500));
    }

    #[wasm_bindgen_test]
    fn test_resolve_rejects_undefined_uri() {
        let source = serde_wasm_bindgen::to_value(&TestSource {
            uri: None,
            width: None,
            height: None,
        })
        .unwrap();

        assert!(resolve_dimensions(source, None).is_err());
    }
}
