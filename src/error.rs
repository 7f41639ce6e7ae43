use thiserror::Error;

use crate::maze::Position;

/// Structural input errors, rejected before any work is done.
///
/// A goal that cannot be reached is not an error: it is reported as a
/// [`SearchResult`](crate::solvers::SearchResult) with an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: rows and cols must be at least 1 and their product must fit in a usize")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("endpoint {position} is outside the {rows}x{cols} maze")]
    InvalidEndpoint {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("invalid cell value {0}: expected 0 (path) or 1 (wall)")]
    InvalidCell(u8),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
