pub mod cell;
mod grid;
mod position;

use serde::{Deserialize, Serialize};

pub use cell::Cell;
pub use grid::Grid;
pub use position::{ParsePositionError, Position};

use crate::error::MazeError;

/// A rectangular maze of [`Cell`]s.
///
/// The implicit graph has one vertex per [`Cell::Path`] and an edge between
/// every pair of 4-directionally adjacent path cells. Dimensions are fixed for
/// the lifetime of the maze and travel with it, so callers never need any
/// shared dimension state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Maze {
    grid: Grid<Cell>,
}

/// Number of cells in a `rows x cols` maze. Both sides must be non-zero and
/// the product must not overflow.
fn cell_count(rows: usize, cols: usize) -> Result<usize, MazeError> {
    rows.checked_mul(cols)
        .filter(|&count| count > 0)
        .ok_or(MazeError::InvalidDimensions { rows, cols })
}

impl Maze {
    /// Creates a maze of the given size with every cell set to a wall.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        cell_count(rows, cols)?;
        Ok(Maze {
            grid: Grid::new(rows, cols, Cell::Wall),
        })
    }

    /// Builds a maze from row-major rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(cell_count(num_rows, num_cols)?);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != num_cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: cells.len(),
                });
            }
            data.extend(cells);
        }
        Ok(Maze {
            grid: Grid::from_vec(num_rows, num_cols, data),
        })
    }

    /// Returns the cells as nested rows, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.grid.iter_rows().map(<[Cell]>::to_vec).collect()
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The bottom-right corner, the default goal of a generated maze.
    pub fn exit(&self) -> Position {
        Position::new(self.rows() - 1, self.cols() - 1)
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.grid.is_in_bounds(pos)
    }

    /// Whether `pos` is in bounds and a path cell.
    pub fn is_open(&self, pos: Position) -> bool {
        self.grid.get(pos).is_some_and(|cell| cell.is_path())
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.grid.set(pos, cell);
    }

    pub(crate) fn cells(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Checks that `pos` lies inside the maze.
    pub fn check_endpoint(&self, pos: Position) -> Result<(), MazeError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(MazeError::InvalidEndpoint {
                position: pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Open neighbors of `pos`, always enumerated as down, up, right, left.
    ///
    /// Exploration order of every search strategy depends on this order.
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let Position { row, col } = pos;
        [
            // Underflow wraps to usize::MAX and overflow saturates to usize::MAX,
            // both of which are filtered out by the bounds check.
            Position::new(row.saturating_add(1), col),
            Position::new(row.wrapping_sub(1), col),
            Position::new(row, col.saturating_add(1)),
            Position::new(row, col.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&n| self.is_open(n))
    }

    /// Counts path cells.
    pub fn open_cells(&self) -> usize {
        self.grid.iter().filter(|(_, cell)| cell.is_path()).count()
    }
}

impl std::ops::Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.grid[pos]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Maze {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Maze::from_rows(rows)
    }
}

impl From<Maze> for Vec<Vec<Cell>> {
    fn from(maze: Maze) -> Self {
        maze.to_rows()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a maze from 0/1 rows, the same encoding as the JSON wire format.
    pub(crate) fn maze_from_codes(codes: &[&[u8]]) -> Maze {
        let rows = codes
            .iter()
            .map(|row| row.iter().map(|&c| Cell::try_from(c).unwrap()).collect())
            .collect();
        Maze::from_rows(rows).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            Maze::new(0, 4),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert_eq!(
            Maze::new(3, 0),
            Err(MazeError::InvalidDimensions { rows: 3, cols: 0 })
        );
        assert_eq!(
            Maze::new(usize::MAX, 2),
            Err(MazeError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2
            })
        );
        let maze = Maze::new(2, 3).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (2, 3));
        assert_eq!(maze.open_cells(), 0);
    }

    #[test]
    fn test_from_rows_validation() {
        assert_eq!(
            Maze::from_rows(vec![]),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 0 })
        );
        assert_eq!(
            Maze::from_rows(vec![vec![]]),
            Err(MazeError::InvalidDimensions { rows: 1, cols: 0 })
        );
        assert_eq!(
            Maze::from_rows(vec![vec![Cell::Path, Cell::Wall], vec![Cell::Path]]),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_neighbor_order_and_filtering() {
        let maze = maze_from_codes(&[&[0, 0, 0], &[0, 0, 0], &[0, 1, 0]]);
        let center: Vec<_> = maze.open_neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![Position::new(0, 1), Position::new(1, 2), Position::new(1, 0)]
        );
        let corner: Vec<_> = maze.open_neighbors(Position::ORIGIN).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
        let bottom_right: Vec<_> = maze.open_neighbors(Position::new(2, 2)).collect();
        assert_eq!(bottom_right, vec![Position::new(1, 2)]);
    }

    #[test]
    fn test_is_open_and_bounds() {
        let maze = maze_from_codes(&[&[0, 1], &[1, 0]]);
        assert!(maze.is_open(Position::new(0, 0)));
        assert!(!maze.is_open(Position::new(0, 1)));
        assert!(!maze.is_open(Position::new(2, 0)));
        assert!(maze.check_endpoint(Position::new(1, 1)).is_ok());
        assert_eq!(
            maze.check_endpoint(Position::new(1, 2)),
            Err(MazeError::InvalidEndpoint {
                position: Position::new(1, 2),
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(maze.exit(), Position::new(1, 1));
    }

    #[test]
    fn test_json_nested_arrays() {
        let maze = maze_from_codes(&[&[0, 0, 1], &[1, 0, 1]]);
        let json = serde_json::to_string(&maze).unwrap();
        assert_eq!(json, "[[0,0,1],[1,0,1]]");
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, maze);
        assert!(serde_json::from_str::<Maze>("[[0,1],[0]]").is_err());
        assert!(serde_json::from_str::<Maze>("[]").is_err());
    }
}
