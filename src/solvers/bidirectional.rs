use std::collections::VecDeque;

use super::{Exploration, reconstruct_path};
use crate::maze::{Grid, Maze, Position};

/// One direction of a bidirectional breadth-first search.
struct Side {
    queue: VecDeque<Position>,
    seen: Grid<bool>,
    parents: Grid<Option<Position>>,
}

impl Side {
    /// A side rooted at `seed`. A wall seed reaches nothing, so the side starts
    /// out exhausted.
    fn seeded(maze: &Maze, seed: Position) -> Self {
        let mut side = Side {
            queue: VecDeque::new(),
            seen: Grid::new(maze.rows(), maze.cols(), false),
            parents: Grid::new(maze.rows(), maze.cols(), None),
        };
        if maze.is_open(seed) {
            side.seen[seed] = true;
            side.queue.push_back(seed);
        }
        side
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pops every vertex of the current layer, recording each one in `explored`.
    ///
    /// Returns the first popped vertex the `other` side has already discovered.
    fn expand_layer(
        &mut self,
        maze: &Maze,
        other: &Side,
        explored: &mut Vec<Position>,
    ) -> Option<Position> {
        for _ in 0..self.queue.len() {
            let node = self.queue.pop_front()?;
            explored.push(node);
            if other.seen[node] {
                return Some(node);
            }
            for neighbor in maze.open_neighbors(node) {
                if !self.seen[neighbor] {
                    self.seen[neighbor] = true;
                    self.parents[neighbor] = Some(node);
                    self.queue.push_back(neighbor);
                }
            }
        }
        None
    }
}

/// Breadth-first search from `start` and `goal` at once, alternating one full
/// layer forward with one full layer backward until a popped vertex has been
/// discovered by the opposite side.
///
/// A vertex can never be popped by both sides: whichever side pops it second
/// would have found the meeting point earlier, at the vertex itself or at the
/// neighbor it was discovered through.
///
/// When one side runs dry without a meeting the two components are disjoint;
/// the other side still drains its queue so the trace covers everything
/// reachable from both seeds.
pub(super) fn search(maze: &Maze, start: Position, goal: Position) -> Exploration {
    let mut forward = Side::seeded(maze, start);
    let mut backward = Side::seeded(maze, goal);
    let mut explored = Vec::new();

    let mut meeting = None;
    while meeting.is_none() && !(forward.is_exhausted() && backward.is_exhausted()) {
        meeting = forward.expand_layer(maze, &backward, &mut explored);
        if meeting.is_none() {
            meeting = backward.expand_layer(maze, &forward, &mut explored);
        }
    }

    let Some(meeting) = meeting else {
        return Exploration {
            explored,
            path: Vec::new(),
        };
    };

    // start ..= meeting, then the backward parents of meeting down to goal
    let mut path = reconstruct_path(&forward.parents, meeting);
    let mut next = backward.parents[meeting];
    while let Some(pos) = next {
        path.push(pos);
        next = backward.parents[pos];
    }
    Exploration { explored, path }
}
