use rand::{Rng, seq::SliceRandom};

use crate::maze::{Cell, Maze, Position};

/// A carving move on the step-2 lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Order the directions are listed in before every shuffle.
    const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns `(wall, target)`: the cell one step away and the cell two steps away,
    /// or `None` if the target falls outside the maze.
    fn carve_targets(self, from: Position, maze: &Maze) -> Option<(Position, Position)> {
        let Position { row, col } = from;
        let (wall, target) = match self {
            Direction::Right => (
                Position::new(row, col + 1),
                Position::new(row, col.checked_add(2)?),
            ),
            Direction::Left => (
                Position::new(row, col.checked_sub(1)?),
                Position::new(row, col.checked_sub(2)?),
            ),
            Direction::Down => (
                Position::new(row + 1, col),
                Position::new(row.checked_add(2)?, col),
            ),
            Direction::Up => (
                Position::new(row.checked_sub(1)?, col),
                Position::new(row.checked_sub(2)?, col),
            ),
        };
        maze.is_in_bounds(target).then_some((wall, target))
    }
}

/// A cell whose directions are still being tried.
struct Frame {
    cell: Position,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(cell: Position, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied();
        self.next += 1;
        direction
    }
}

/// Carves a perfect maze into `maze` (expected to be all walls) starting from the origin.
///
/// Randomized recursive backtracking on the step-2 lattice: every carved cell is
/// separated from the next by exactly one opened wall cell. The recursion is
/// unrolled into an explicit stack of [`Frame`]s, which visits cells in exactly
/// the order the recursive version would for the same sequence of shuffles.
pub fn recursive_backtrack<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let start = Position::ORIGIN;
    maze.set(start, Cell::Path);

    let mut stack = vec![Frame::enter(start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            // All directions tried, backtrack
            stack.pop();
            continue;
        };
        let cell = frame.cell;

        let Some((wall, target)) = direction.carve_targets(cell, maze) else {
            continue;
        };
        if maze[target].is_wall() {
            maze.set(wall, Cell::Path);
            maze.set(target, Cell::Path);
            stack.push(Frame::enter(target, rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Call-stack version of the carve, used as the reference for the unrolled one.
    fn recursive_reference<R: Rng>(maze: &mut Maze, cell: Position, rng: &mut R) {
        maze.set(cell, Cell::Path);
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        for direction in directions {
            if let Some((wall, target)) = direction.carve_targets(cell, maze) {
                if maze[target].is_wall() {
                    maze.set(wall, Cell::Path);
                    recursive_reference(maze, target, rng);
                }
            }
        }
    }

    #[test]
    fn test_matches_recursive_carve() {
        for seed in 0..20 {
            let mut unrolled = Maze::new(9, 13).unwrap();
            recursive_backtrack(&mut unrolled, &mut StdRng::seed_from_u64(seed));

            let mut reference = Maze::new(9, 13).unwrap();
            recursive_reference(&mut reference, Position::ORIGIN, &mut StdRng::seed_from_u64(seed));

            assert_eq!(unrolled, reference, "seed {seed}");
        }
    }

    #[test]
    fn test_carves_only_even_lattice_cells_and_single_walls() {
        let mut maze = Maze::new(11, 11).unwrap();
        recursive_backtrack(&mut maze, &mut StdRng::seed_from_u64(7));
        for (pos, cell) in maze.cells().iter() {
            if pos.row % 2 == 0 && pos.col % 2 == 0 {
                // Every lattice cell of an odd-sized maze is reached
                assert!(cell.is_path(), "{pos} should be carved");
            } else if pos.row % 2 == 1 && pos.col % 2 == 1 {
                // Cells off the lattice in both axes are never opened
                assert!(cell.is_wall(), "{pos} should stay a wall");
            }
        }
    }

    #[test]
    fn test_carve_targets_bounds() {
        let maze = Maze::new(3, 3).unwrap();
        let origin = Position::ORIGIN;
        assert_eq!(Direction::Left.carve_targets(origin, &maze), None);
        assert_eq!(Direction::Up.carve_targets(origin, &maze), None);
        assert_eq!(
            Direction::Right.carve_targets(origin, &maze),
            Some((Position::new(0, 1), Position::new(0, 2)))
        );
        assert_eq!(
            Direction::Down.carve_targets(origin, &maze),
            Some((Position::new(1, 0), Position::new(2, 0)))
        );
        assert_eq!(Direction::Right.carve_targets(Position::new(0, 2), &maze), None);
    }
}
