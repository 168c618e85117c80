//! Error types for grid building and wall collection.

use thiserror::Error;

/// Errors returned by the grid core.
///
/// [`GridError::InvalidCellSize`] is a configuration problem: the caller can
/// prompt for a corrected size and retry the build. [`GridError::RaggedGrid`]
/// indicates a defect upstream of wall collection and is not recoverable
/// within the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested cell size cannot produce a grid.
    #[error("cell size must be at least 1 pixel, got {cell_size}")]
    InvalidCellSize {
        /// The rejected size.
        cell_size: u32,
    },

    /// A non-rectangular grid was handed to wall collection.
    #[error("ragged grid: row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
}
