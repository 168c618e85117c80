//! Building the cell grid from canvas dimensions.

use crate::cell::{Cell, WallSet};
use crate::error::GridError;
use rand::Rng;

/// A rectangular grid of [`Cell`]s, indexed `[row][col]`, row-major,
/// top-to-bottom / left-to-right matching ascending y / x.
///
/// A grid is built wholesale by [`Grid::build`] and replaced, never patched:
/// a populate/clear cycle discards the previous grid entirely.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid covering a `canvas_width` x `canvas_height` canvas with
    /// square cells of `cell_size` pixels, each with a wall record drawn from
    /// `rng`.
    ///
    /// Column and row counts are `canvas_width / cell_size` and
    /// `canvas_height / cell_size` (integer division); a partial trailing
    /// cell that does not fit is excluded. A cell size larger than both
    /// canvas dimensions yields an empty grid, which is not an error.
    ///
    /// The random source is injected so that fixed-seed runs rebuild the
    /// exact same grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_canvas::grid::Grid;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let grid = Grid::build(800, 600, 100, &mut rng).unwrap();
    /// assert_eq!(grid.num_rows(), 6);
    /// assert_eq!(grid.num_cols(), 8);
    /// assert_eq!(grid.cell_count(), 48);
    /// ```
    pub fn build(
        canvas_width: u32,
        canvas_height: u32,
        cell_size: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::InvalidCellSize { cell_size });
        }
        let num_cols = (canvas_width / cell_size) as usize;
        let num_rows = (canvas_height / cell_size) as usize;
        let rows = (0..num_rows)
            .map(|row| {
                (0..num_cols)
                    .map(|col| {
                        let x1 = col as u32 * cell_size;
                        let y1 = row as u32 * cell_size;
                        Cell::new(x1, y1, x1 + cell_size, y1 + cell_size, WallSet::random(rng))
                    })
                    .collect()
            })
            .collect();
        Ok(Self { rows })
    }

    /// Creates a grid directly from rows of cells.
    ///
    /// Callers must keep the rows rectangular; wall collection fails fast on
    /// ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Total number of cells, `num_rows * num_cols`.
    pub fn cell_count(&self) -> usize {
        self.num_rows() * self.num_cols()
    }

    /// Returns whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// The rows of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The cell at `[row][col]`, or `None` if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// The `(row, col)` of the cell containing canvas point `(x, y)`, or
    /// `None` if the point falls outside every cell.
    pub fn cell_at_point(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.contains(x, y) {
                    return Some((row, col));
                }
            }
        }
        None
    }
}
