use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Represents a cell in the maze, which can be either an open path or a wall.
///
/// On the wire a cell is a single integer: `0` for a path, `1` for a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    Path,
    Wall,
}

impl Cell {
    pub const PATH_CODE: u8 = 0;
    pub const WALL_CODE: u8 = 1;

    pub fn is_path(self) -> bool {
        self == Cell::Path
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Path => Cell::PATH_CODE,
            Cell::Wall => Cell::WALL_CODE,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            Cell::PATH_CODE => Ok(Cell::Path),
            Cell::WALL_CODE => Ok(Cell::Wall),
            other => Err(MazeError::InvalidCell(other)),
        }
    }
}
