//! Types for image size resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason reported when a source has neither dimensions nor a URI.
pub const MISSING_URI: &str = "Source uri is required";

/// Error types for image size resolution.
///
/// Every failure, including a source with nothing to probe, is `Unavailable`.
#[derive(Debug, Error)]
pub enum DimensionError {
    /// The size could not be determined: no URI, an unreadable resource,
    /// or an unparseable header.
    #[error("Could not fetch image size for {uri:?}: {reason}")]
    Unavailable { uri: String, reason: String },
}

impl DimensionError {
    /// The error for a source with neither dimensions nor a URI.
    pub fn missing_uri() -> Self {
        DimensionError::Unavailable {
            uri: String::new(),
            reason: MISSING_URI.to_string(),
        }
    }
}

/// A source image as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub uri: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageSource {
    /// A source known only by URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// Natural pixel size of a source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Zero-sized fallback used when resolution fails.
    pub const EMPTY: Dimensions = Dimensions {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, or 0.0 for empty dimensions.
    pub fn aspect_ratio(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// The size with width and height exchanged (a quarter turn).
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}
