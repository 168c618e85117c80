//! Deduplicated wall collection across a grid.
//!
//! Up to two adjacent cells independently record the same physical edge; the
//! collector threads one dedup set through the whole pass so each edge is
//! emitted exactly once.

use crate::error::GridError;
use crate::geometry::Segment;
use crate::grid::Grid;
use std::collections::HashSet;

/// Collects every wall in `grid` exactly once, in encounter order.
///
/// Rows are walked top-to-bottom, cells left-to-right, and each cell emits its
/// undrawn walls top, right, bottom, left against one shared dedup set. The
/// set lives for exactly one call, so independent collection passes cannot
/// interfere with each other.
///
/// Fails fast with [`GridError::RaggedGrid`] if the rows are not all the same
/// length; no partial output is returned.
///
/// # Examples
///
/// ```
/// use maze_canvas::cell::{Cell, WallSet};
/// use maze_canvas::grid::Grid;
/// use maze_canvas::walls::collect_all_walls;
///
/// let grid = Grid::from_rows(vec![vec![Cell::new(0, 0, 50, 50, WallSet::ALL)]]);
/// assert_eq!(collect_all_walls(&grid).unwrap().len(), 4);
/// ```
pub fn collect_all_walls(grid: &Grid) -> Result<Vec<Segment>, GridError> {
    let expected = grid.num_cols();
    for (row, cells) in grid.rows().iter().enumerate() {
        if cells.len() != expected {
            return Err(GridError::RaggedGrid {
                row,
                len: cells.len(),
                expected,
            });
        }
    }

    let mut drawn = HashSet::new();
    let mut segments = Vec::new();
    for row in grid.rows() {
        for cell in row {
            segments.extend(cell.undrawn_walls(&mut drawn));
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Side, WallSet};
    use crate::geometry::{CanvasPoint, Segment};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_cell_with_all_walls_yields_its_perimeter() {
        let cell = Cell::new(0, 0, 100, 100, WallSet::ALL);
        let grid = Grid::from_rows(vec![vec![cell]]);
        let segments = collect_all_walls(&grid).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::new(CanvasPoint::new(0, 0), CanvasPoint::new(100, 0)),
                Segment::new(CanvasPoint::new(100, 0), CanvasPoint::new(100, 100)),
                Segment::new(CanvasPoint::new(0, 100), CanvasPoint::new(100, 100)),
                Segment::new(CanvasPoint::new(0, 0), CanvasPoint::new(0, 100)),
            ]
        );
    }

    #[test]
    fn shared_edge_is_emitted_exactly_once() {
        // the left cell's right wall and the right cell's left wall are the
        // same physical edge
        let left = Cell::new(0, 0, 100, 100, WallSet::NONE.with(Side::Right));
        let right = Cell::new(100, 0, 200, 100, WallSet::NONE.with(Side::Left));
        let grid = Grid::from_rows(vec![vec![left, right]]);
        let segments = collect_all_walls(&grid).unwrap();
        assert_eq!(
            segments,
            vec![Segment::new(
                CanvasPoint::new(100, 0),
                CanvasPoint::new(100, 100)
            )]
        );
    }

    #[test]
    fn fully_walled_grid_counts_every_distinct_edge_once() {
        let rows = (0..2u32)
            .map(|row| {
                (0..2u32)
                    .map(|col| {
                        let (x1, y1) = (col * 50, row * 50);
                        Cell::new(x1, y1, x1 + 50, y1 + 50, WallSet::ALL)
                    })
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(rows);
        // 2x2 cells: 3 vertical edge columns x 2 rows + 3 horizontal edge
        // rows x 2 cols = 12 distinct walls
        assert_eq!(collect_all_walls(&grid).unwrap().len(), 12);
    }

    #[test]
    fn collected_walls_are_unique() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = Grid::build(800, 600, 50, &mut rng).unwrap();
        let segments = collect_all_walls(&grid).unwrap();
        let unique: HashSet<Segment> = segments.iter().copied().collect();
        assert_eq!(unique.len(), segments.len());
    }

    #[test]
    fn every_present_wall_is_collected() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::build(400, 300, 50, &mut rng).unwrap();
        let collected: HashSet<Segment> =
            collect_all_walls(&grid).unwrap().into_iter().collect();
        for row in grid.rows() {
            for cell in row {
                for side in Side::ALL {
                    if cell.walls().has(side) {
                        assert!(collected.contains(&cell.wall_segment(side)));
                    }
                }
            }
        }
    }

    #[test]
    fn empty_grid_collects_nothing() {
        assert_eq!(collect_all_walls(&Grid::default()).unwrap(), vec![]);
    }

    #[test]
    fn wall_free_cells_collect_nothing() {
        let rows = vec![
            vec![
                Cell::new(0, 0, 50, 50, WallSet::NONE),
                Cell::new(50, 0, 100, 50, WallSet::NONE),
            ],
        ];
        assert_eq!(collect_all_walls(&Grid::from_rows(rows)).unwrap(), vec![]);
    }

    #[test]
    fn ragged_grid_fails_fast() {
        let rows = vec![
            vec![
                Cell::new(0, 0, 50, 50, WallSet::ALL),
                Cell::new(50, 0, 100, 50, WallSet::ALL),
            ],
            vec![Cell::new(0, 50, 50, 100, WallSet::ALL)],
        ];
        assert_eq!(
            collect_all_walls(&Grid::from_rows(rows)),
            Err(GridError::RaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn fixed_seed_collects_identical_output() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        let first = collect_all_walls(&Grid::build(800, 600, 100, &mut a).unwrap()).unwrap();
        let second = collect_all_walls(&Grid::build(800, 600, 100, &mut b).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
