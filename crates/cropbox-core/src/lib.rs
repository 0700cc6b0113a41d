//! Cropbox Core - crop geometry engine
//!
//! This crate provides the geometry behind an interactive image cropper:
//! mapping a scaled, bordered and rotated on-screen crop box back to
//! source-image pixels. It never touches pixels itself; the host renders
//! and an external pipeline executes the resulting [`Adjustments`].
//!
//! # Module Structure
//!
//! - `geometry` - Points, bounds and animatable values in display space
//! - `config` - Display box size, feature flags and handle geometry
//! - `dimensions` - Natural image size resolution
//! - `crop` - The [`Cropper`] engine: drags, rotation and adjustments
//!
//! # Example
//!
//! ```ignore
//! use cropbox_core::{Corner, Cropper, CropperConfig, Dimensions, Translation};
//!
//! let mut cropper = Cropper::new(CropperConfig::new(302.0, 600.0), Dimensions::new(1000, 500));
//! cropper.begin_drag(Corner::TopLeft);
//! cropper.drag(Translation::new(30.0, 15.0));
//! cropper.end_drag();
//!
//! let adjustments = cropper.calculate_adjustments();
//! assert_eq!(adjustments.rotate, 0);
//! ```

pub mod config;
pub mod crop;
pub mod dimensions;
pub mod geometry;

pub use config::{CropperConfig, HandleGeometry};
pub use crop::{Adjustments, Corner, CropError, Cropper, DisplayState, Gridlines, RotationAngle};
pub use dimensions::{resolve_dimensions, DimensionError, Dimensions, FileProbe, ImageSource, SizeProbe};
pub use geometry::{Bounds, Point, Translation};
