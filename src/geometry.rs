//! Points and wall segments in canvas pixel space.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A location on the canvas, in whole pixels.
///
/// Integer coordinates compare and hash exactly, which is what lets two cells
/// sharing an edge collide in the dedup set.
pub type CanvasPoint = Point2<u32>;

/// A wall segment between two canvas points.
///
/// Segments are stored in canonical orientation: the endpoint with the smaller
/// `(x, y)` comes first. Two cells that compute the same physical edge from
/// opposite sides therefore produce identical `Segment` values.
///
/// # Examples
///
/// ```
/// use maze_canvas::geometry::{CanvasPoint, Segment};
///
/// let a = Segment::new(CanvasPoint::new(0, 0), CanvasPoint::new(100, 0));
/// let b = Segment::new(CanvasPoint::new(100, 0), CanvasPoint::new(0, 0));
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Segment {
    start: CanvasPoint,
    end: CanvasPoint,
}

impl Segment {
    /// Creates a segment between two points, canonicalizing orientation.
    pub fn new(p1: CanvasPoint, p2: CanvasPoint) -> Self {
        if (p2.x, p2.y) < (p1.x, p1.y) {
            Self { start: p2, end: p1 }
        } else {
            Self { start: p1, end: p2 }
        }
    }

    /// The endpoint with the smaller `(x, y)`.
    pub fn start(&self) -> CanvasPoint {
        self.start
    }

    /// The endpoint with the larger `(x, y)`.
    pub fn end(&self) -> CanvasPoint {
        self.end
    }
}
