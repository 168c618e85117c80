//! Grid cells: rectangle bounds, wall bookkeeping, and wall emission.

use crate::geometry::{CanvasPoint, Segment};
use nalgebra::Point2;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Enum for the four sides of a cell.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Side {
    /// The top edge, at the cell's smaller y.
    Top = 0,
    /// The right edge, at the cell's larger x.
    Right = 1,
    /// The bottom edge, at the cell's larger y.
    Bottom = 2,
    /// The left edge, at the cell's smaller x.
    Left = 3,
}

impl Side {
    /// All four sides, in the order walls are emitted.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The bit for this side in a [`WallSet`].
    fn mask(self) -> u8 {
        1 << u8::from(self)
    }
}

/// Which of a cell's four sides currently carry a wall.
///
/// One bit per [`Side`]; the set of sides is closed, so a missing or
/// misspelled direction cannot exist.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WallSet(u8);

impl WallSet {
    /// No walls on any side.
    pub const NONE: WallSet = WallSet(0);
    /// Walls on all four sides.
    pub const ALL: WallSet = WallSet(0b1111);

    /// Draws all four wall bits from one 4-bit sample of `rng`.
    ///
    /// Each side is present with probability 1/2, the same distribution as
    /// four independent coin flips.
    pub fn random(rng: &mut impl Rng) -> Self {
        WallSet(rng.gen::<u8>() & 0b1111)
    }

    /// Returns whether `side` carries a wall.
    pub fn has(self, side: Side) -> bool {
        self.0 & side.mask() != 0
    }

    /// Returns a copy of this set with a wall added on `side`.
    pub fn with(self, side: Side) -> Self {
        WallSet(self.0 | side.mask())
    }

    /// Returns a copy of this set with the wall on `side` removed.
    pub fn without(self, side: Side) -> Self {
        WallSet(self.0 & !side.mask())
    }
}

/// One grid square: rectangle bounds, its wall record, and the four canonical
/// wall segments computed once at construction.
///
/// Cells are created by the grid builder and never mutated during a populate
/// pass; adjacency is implicit via coordinates, not stored as references.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    walls: WallSet,
    // indexed by Side discriminant
    wall_segments: [Segment; 4],
}

impl Cell {
    /// Creates a cell with the given bounds and wall record.
    ///
    /// Requires `x1 < x2` and `y1 < y2`.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32, walls: WallSet) -> Self {
        debug_assert!(x1 < x2 && y1 < y2, "degenerate cell bounds");
        // One fixed corner pair per side; two adjacent cells compute their
        // shared edge from the same pair of corners.
        let wall_segments = [
            Segment::new(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y1)), // top
            Segment::new(CanvasPoint::new(x2, y1), CanvasPoint::new(x2, y2)), // right
            Segment::new(CanvasPoint::new(x1, y2), CanvasPoint::new(x2, y2)), // bottom
            Segment::new(CanvasPoint::new(x1, y1), CanvasPoint::new(x1, y2)), // left
        ];
        Self {
            x1,
            y1,
            x2,
            y2,
            walls,
            wall_segments,
        }
    }

    /// This cell's wall record.
    pub fn walls(&self) -> WallSet {
        self.walls
    }

    /// The cached canonical segment for one side of this cell.
    pub fn wall_segment(&self, side: Side) -> Segment {
        self.wall_segments[u8::from(side) as usize]
    }

    /// The cell's rectangle as `(x1, y1, x2, y2)`.
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Returns whether the canvas point `(x, y)` falls inside this cell.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }

    /// The cell's midpoint, used for the move marker.
    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            (self.x1 + self.x2) as f32 / 2.0,
            (self.y1 + self.y2) as f32 / 2.0,
        )
    }

    /// Returns this cell's present walls that are not yet in `drawn`,
    /// inserting each into the set as it is emitted.
    ///
    /// Emission order is fixed: top, right, bottom, left. `drawn` is shared
    /// across every cell of one collection pass, so a wall the neighbor
    /// already emitted is skipped here. A cell with no walls yields nothing.
    pub fn undrawn_walls(&self, drawn: &mut HashSet<Segment>) -> Vec<Segment> {
        let mut out = Vec::new();
        for side in Side::ALL {
            if self.walls.has(side) {
                let segment = self.wall_segment(side);
                if drawn.insert(segment) {
                    out.push(segment);
                }
            }
        }
        out
    }
}
