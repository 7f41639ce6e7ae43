use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 0-indexed `(row, col)` coordinate, the vertex identity of the maze graph.
///
/// Positions order row-major (row first, then col). Priority frontiers rely on
/// this ordering to break ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan (L1) distance between two positions.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one step away along a single axis.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a position as `row,col`, got `{0}`")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `row,col` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Position { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn test_manhattan_and_adjacency() {
        let a = Position::new(1, 1);
        assert_eq!(a.manhattan(Position::new(4, 0)), 4);
        assert!(a.is_adjacent(Position::new(0, 1)));
        assert!(a.is_adjacent(Position::new(1, 2)));
        assert!(!a.is_adjacent(Position::new(2, 2)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,4".parse::<Position>(), Ok(Position::new(3, 4)));
        assert_eq!(" 10 , 0 ".parse::<Position>(), Ok(Position::new(10, 0)));
        assert!("3".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("-1,2".parse::<Position>().is_err());
    }

    #[test]
    fn test_json_pair() {
        let json = serde_json::to_string(&Position::new(2, 7)).unwrap();
        assert_eq!(json, "[2,7]");
        let pos: Position = serde_json::from_str("[5, 1]").unwrap();
        assert_eq!(pos, Position::new(5, 1));
    }
}
