//! Core types for the crop engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop engine inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// The angle is not one of the supported quarter turns.
    #[error("Invalid rotation angle: {0} (expected one of 0, ±90, ±180, ±270)")]
    InvalidRotation(i32),

    /// The name does not identify a corner handle.
    #[error("Unknown corner: {0}")]
    UnknownCorner(String),
}

/// Supported rotation angles, in signed degrees.
///
/// Angles are kept exactly as the host supplied them (no normalisation to
/// 0..360), because the downstream pipeline receives them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum RotationAngle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
    NegDeg90,
    NegDeg180,
    NegDeg270,
}

impl RotationAngle {
    /// Signed degrees.
    pub fn degrees(self) -> i32 {
        match self {
            RotationAngle::Deg0 => 0,
            RotationAngle::Deg90 => 90,
            RotationAngle::Deg180 => 180,
            RotationAngle::Deg270 => 270,
            RotationAngle::NegDeg90 => -90,
            RotationAngle::NegDeg180 => -180,
            RotationAngle::NegDeg270 => -270,
        }
    }

    /// Returns true for quarter turns, which swap width and height.
    #[inline]
    pub fn is_orthogonal(self) -> bool {
        self.degrees() % 180 != 0
    }

    /// The next clockwise quarter turn, stepping `(degrees + 90) % 360`.
    ///
    /// Four steps from any angle land on a multiple of 360.
    pub fn clockwise(self) -> Self {
        match (self.degrees() + 90) % 360 {
            90 => RotationAngle::Deg90,
            180 => RotationAngle::Deg180,
            270 => RotationAngle::Deg270,
            -90 => RotationAngle::NegDeg90,
            -180 => RotationAngle::NegDeg180,
            _ => RotationAngle::Deg0,
        }
    }
}

impl TryFrom<i32> for RotationAngle {
    type Error = CropError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RotationAngle::Deg0),
            90 => Ok(RotationAngle::Deg90),
            180 => Ok(RotationAngle::Deg180),
            270 => Ok(RotationAngle::Deg270),
            -90 => Ok(RotationAngle::NegDeg90),
            -180 => Ok(RotationAngle::NegDeg180),
            -270 => Ok(RotationAngle::NegDeg270),
            other => Err(CropError::InvalidRotation(other)),
        }
    }
}

impl From<RotationAngle> for i32 {
    fn from(angle: RotationAngle) -> Self {
        angle.degrees()
    }
}

/// One of the four crop handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// The corner sharing this corner's vertical edge, which tracks its x.
    pub fn x_partner(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    /// The corner sharing this corner's horizontal edge, which tracks its y.
    pub fn y_partner(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }
}

impl std::str::FromStr for Corner {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topLeft" | "top-left" => Ok(Corner::TopLeft),
            "topRight" | "top-right" => Ok(Corner::TopRight),
            "bottomLeft" | "bottom-left" => Ok(Corner::BottomLeft),
            "bottomRight" | "bottom-right" => Ok(Corner::BottomRight),
            other => Err(CropError::UnknownCorner(other.to_string())),
        }
    }
}

/// Top or bottom edge, moved vertically by a box drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Left or right edge, moved horizontally by a box drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}
