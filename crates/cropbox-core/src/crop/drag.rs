//! Handle constraint solver.
//!
//! Two gesture styles are supported:
//!
//! - **Corner drags** move one handle. Each axis is clamped between the
//!   live bounds and the handle on the opposite side, and the two handles
//!   sharing an edge with the dragged one follow it on that axis, so the
//!   crop stays rectangular.
//! - **Box drags** treat the crop as one rectangle. Where the pointer lands
//!   relative to the box thirds picks the edges that move.
//!
//! Start state is captured once per gesture; every move applies the
//! cumulative translation to that snapshot, so repeated events never drift.

use log::warn;

use super::types::{Corner, HorizontalEdge, VerticalEdge};
use super::Cropper;
use crate::geometry::{clamp_saturating, Point, Translation};

/// The crop rectangle in handle coordinates.
///
/// `right` and `bottom` are positions of the right and bottom handles, not
/// the visual edge; add the indicator inset for the visual extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Edges moved by a box drag. `None` on an axis leaves it inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSelection {
    pub vertical: Option<VerticalEdge>,
    pub horizontal: Option<HorizontalEdge>,
}

impl EdgeSelection {
    /// Classify `pointer` against the thirds of `rect` (widened by `inset`).
    ///
    /// The outer thirds select the nearest edge on that axis; the middle
    /// third selects nothing.
    pub fn classify(rect: &CropRect, inset: f64, pointer: Point) -> Self {
        let width = rect.right - rect.left + inset;
        let height = rect.bottom - rect.top + inset;

        let horizontal = match third(pointer.x - rect.left, width) {
            Some(Third::First) => Some(HorizontalEdge::Left),
            Some(Third::Last) => Some(HorizontalEdge::Right),
            _ => None,
        };
        let vertical = match third(pointer.y - rect.top, height) {
            Some(Third::First) => Some(VerticalEdge::Top),
            Some(Third::Last) => Some(VerticalEdge::Bottom),
            _ => None,
        };

        Self {
            vertical,
            horizontal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

enum Third {
    First,
    Middle,
    Last,
}

fn third(offset: f64, extent: f64) -> Option<Third> {
    if extent <= 0.0 {
        return None;
    }
    let t = offset / extent;
    Some(if t < 1.0 / 3.0 {
        Third::First
    } else if t > 2.0 / 3.0 {
        Third::Last
    } else {
        Third::Middle
    })
}

/// An in-progress pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Gesture {
    Corner { corner: Corner, start: Point },
    Edges { edges: EdgeSelection, start: CropRect },
}

impl Cropper {
    /// Start dragging one corner handle.
    ///
    /// Returns `false` (and changes nothing) if another gesture is active;
    /// only one gesture is tracked at a time.
    pub fn begin_drag(&mut self, corner: Corner) -> bool {
        if self.gesture.is_some() {
            warn!("rejected {corner:?} drag: another gesture is active");
            return false;
        }
        self.gesture = Some(Gesture::Corner {
            corner,
            start: self.handle(corner),
        });
        true
    }

    /// Start dragging the whole crop box from `pointer`.
    ///
    /// Returns `false` if another gesture is active.
    pub fn begin_box_drag(&mut self, pointer: Point) -> bool {
        if self.gesture.is_some() {
            warn!("rejected box drag: another gesture is active");
            return false;
        }
        let start = self.crop_rect();
        let edges = EdgeSelection::classify(&start, self.config.handle.indicator_inset(), pointer);
        self.gesture = Some(Gesture::Edges { edges, start });
        true
    }

    /// Apply the cumulative `translation` since the gesture began.
    ///
    /// Out-of-range translations saturate at the limits. Without an active
    /// gesture this does nothing.
    pub fn drag(&mut self, translation: Translation) {
        match self.gesture {
            Some(Gesture::Corner { corner, start }) => self.drag_corner(corner, start, translation),
            Some(Gesture::Edges { edges, start }) => self.drag_edges(edges, start, translation),
            None => {}
        }
    }

    /// Finish the gesture, keeping the last clamped positions.
    pub fn end_drag(&mut self) {
        self.gesture = None;
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The crop rectangle spanned by the live handles.
    pub fn crop_rect(&self) -> CropRect {
        let tl = self.handle(Corner::TopLeft);
        let br = self.handle(Corner::BottomRight);
        CropRect {
            left: tl.x,
            top: tl.y,
            right: br.x,
            bottom: br.y,
        }
    }

    fn drag_corner(&mut self, corner: Corner, start: Point, translation: Translation) {
        let bounds = self.bounds;
        let x_partner = corner.x_partner();
        let y_partner = corner.y_partner();

        // Same-row handle limits x, same-column handle limits y
        let row_x = self.handles.get(y_partner).x.value();
        let column_y = self.handles.get(x_partner).y.value();

        let (x_lo, x_hi) = if corner.is_left() {
            (bounds.left_x, row_x)
        } else {
            (row_x, bounds.right_x)
        };
        let (y_lo, y_hi) = if corner.is_top() {
            (bounds.top_y, column_y)
        } else {
            (column_y, bounds.bottom_y)
        };

        let x = clamp_saturating(start.x + translation.dx, x_lo, x_hi);
        let y = clamp_saturating(start.y + translation.dy, y_lo, y_hi);

        let handle = self.handles.get_mut(corner);
        handle.x.set(x);
        handle.y.set(y);
        self.handles.get_mut(x_partner).x.set(x);
        self.handles.get_mut(y_partner).y.set(y);
    }

    fn drag_edges(&mut self, edges: EdgeSelection, start: CropRect, translation: Translation) {
        let bounds = self.bounds;

        match edges.vertical {
            Some(VerticalEdge::Top) => {
                let top = clamp_saturating(start.top + translation.dy, bounds.top_y, start.bottom);
                self.set_row_y(true, top);
            }
            Some(VerticalEdge::Bottom) => {
                let bottom =
                    clamp_saturating(start.bottom + translation.dy, start.top, bounds.bottom_y);
                self.set_row_y(false, bottom);
            }
            None => {}
        }

        match edges.horizontal {
            Some(HorizontalEdge::Left) => {
                let left = clamp_saturating(start.left + translation.dx, bounds.left_x, start.right);
                self.set_column_x(true, left);
            }
            Some(HorizontalEdge::Right) => {
                let right =
                    clamp_saturating(start.right + translation.dx, start.left, bounds.right_x);
                self.set_column_x(false, right);
            }
            None => {}
        }
    }

    fn set_row_y(&mut self, top: bool, y: f64) {
        for corner in Corner::ALL.into_iter().filter(|c| c.is_top() == top) {
            self.handles.get_mut(corner).y.set(y);
        }
    }

    fn set_column_x(&mut self, left: bool, x: f64) {
        for corner in Corner::ALL.into_iter().filter(|c| c.is_left() == left) {
            self.handles.get_mut(corner).x.set(x);
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
