//! Natural image size resolution.
//!
//! The cropper needs the source image's pixel size before it can lay out
//! anything. Sizes come either straight from the source record or from a
//! [`SizeProbe`] that reads the image header.
//!
//! Resolution is attempted exactly once per source; a failure is reported
//! as [`DimensionError`] and the host is expected to fall back to
//! [`Dimensions::EMPTY`] and show an empty state.

mod probe;
mod types;

pub use probe::{probe_bytes, FileProbe, SizeProbe};
pub use types::{DimensionError, Dimensions, ImageSource, MISSING_URI};

/// Resolve the natural size of `source`.
///
/// Explicit dimensions on the source win. Otherwise the URI is probed.
///
/// # Errors
///
/// Returns [`DimensionError::Unavailable`] when the source has neither
/// dimensions nor a URI (reason [`MISSING_URI`]) or when the probe could
/// not read the resource.
pub fn resolve_dimensions<P: SizeProbe + ?Sized>(
    source: &ImageSource,
    probe: &P,
) -> Result<Dimensions, DimensionError> {
    if let (Some(width), Some(height)) = (source.width, source.height) {
        return Ok(Dimensions::new(width, height));
    }

    let uri = source.uri.as_deref().ok_or_else(DimensionError::missing_uri)?;

    probe.probe(uri)
}
