use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use super::{Exploration, reconstruct_path};
use crate::maze::{Grid, Maze, Position};

/// Cost sentinel for vertices no search has reached yet.
const UNREACHED: usize = usize::MAX;

/// The set of discovered-but-not-yet-settled vertices a search picks from next.
///
/// The discipline of the frontier is the only thing that differs between BFS,
/// DFS, Dijkstra, A* and greedy best-first search; [`traverse`] does the rest.
pub(super) trait Frontier {
    /// `true` when a vertex is final as soon as it is discovered, so it is never
    /// pushed twice. `false` when it is final only once popped, so it may be
    /// pushed again on a cost improvement and stale entries get skipped on pop.
    const SETTLES_ON_DISCOVERY: bool;

    fn push(&mut self, pos: Position, cost: usize);

    fn pop(&mut self) -> Option<Position>;

    /// Whether an unsettled vertex takes every later expanding neighbor as its
    /// parent, not only one that lowers its cost.
    fn relinks_parent(&self) -> bool {
        false
    }
}

/// First in, first out.
#[derive(Default)]
pub(super) struct Fifo(VecDeque<Position>);

impl Frontier for Fifo {
    const SETTLES_ON_DISCOVERY: bool = true;

    fn push(&mut self, pos: Position, _cost: usize) {
        self.0.push_back(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.0.pop_front()
    }
}

/// Last in, first out: the most recently pushed neighbor is expanded first.
#[derive(Default)]
pub(super) struct Lifo(Vec<Position>);

impl Frontier for Lifo {
    const SETTLES_ON_DISCOVERY: bool = true;

    fn push(&mut self, pos: Position, _cost: usize) {
        self.0.push(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.0.pop()
    }
}

/// What a [`Ranked`] frontier orders its entries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rank {
    /// Accumulated cost from the start (Dijkstra).
    Cost,
    /// Manhattan distance to the goal (greedy best-first).
    Heuristic,
    /// Accumulated cost plus Manhattan distance to the goal (A*).
    CostPlusHeuristic,
}

/// Min-priority frontier. Equal keys pop in row-major [`Position`] order.
pub(super) struct Ranked {
    // Reverse turns the max-heap into a min-heap
    heap: BinaryHeap<Reverse<(usize, Position)>>,
    rank: Rank,
    goal: Position,
}

impl Ranked {
    pub(super) fn new(rank: Rank, goal: Position) -> Self {
        Ranked {
            heap: BinaryHeap::new(),
            rank,
            goal,
        }
    }

    fn key(&self, pos: Position, cost: usize) -> usize {
        match self.rank {
            Rank::Cost => cost,
            Rank::Heuristic => pos.manhattan(self.goal),
            Rank::CostPlusHeuristic => cost + pos.manhattan(self.goal),
        }
    }
}

impl Frontier for Ranked {
    const SETTLES_ON_DISCOVERY: bool = false;

    fn push(&mut self, pos: Position, cost: usize) {
        let key = self.key(pos, cost);
        self.heap.push(Reverse((key, pos)));
    }

    fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|Reverse((_, pos))| pos)
    }

    /// Greedy ignores cost, so the latest neighbor expanded before a vertex is
    /// popped becomes its parent.
    fn relinks_parent(&self) -> bool {
        self.rank == Rank::Heuristic
    }
}

/// Runs a single-source search from `start` to `goal` with the given frontier.
///
/// Every step costs 1. A vertex is appended to the exploration trace when it is
/// settled, i.e. popped for the first time; later pops of the same vertex are
/// stale entries and are dropped without being expanded.
pub(super) fn traverse<F: Frontier>(
    maze: &Maze,
    start: Position,
    goal: Position,
    mut frontier: F,
) -> Exploration {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut costs = Grid::new(rows, cols, UNREACHED);
    let mut parents: Grid<Option<Position>> = Grid::new(rows, cols, None);
    let mut settled = Grid::new(rows, cols, false);
    let mut explored = Vec::new();

    costs[start] = 0;
    frontier.push(start, 0);

    let mut found = false;
    while let Some(current) = frontier.pop() {
        if settled[current] {
            continue;
        }
        settled[current] = true;
        explored.push(current);

        if current == goal {
            found = true;
            break;
        }

        let next_cost = costs[current] + 1;
        for neighbor in maze.open_neighbors(current) {
            if F::SETTLES_ON_DISCOVERY {
                if costs[neighbor] != UNREACHED {
                    continue;
                }
            } else if settled[neighbor] {
                continue;
            } else if next_cost >= costs[neighbor] {
                if frontier.relinks_parent() {
                    parents[neighbor] = Some(current);
                }
                continue;
            }
            costs[neighbor] = next_cost;
            parents[neighbor] = Some(current);
            frontier.push(neighbor, next_cost);
        }
    }

    let path = if found {
        reconstruct_path(&parents, goal)
    } else {
        Vec::new()
    };
    Exploration { explored, path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_and_lifo_order() {
        let (a, b, c) = (Position::new(0, 0), Position::new(0, 1), Position::new(1, 0));

        let mut fifo = Fifo::default();
        [a, b, c].into_iter().for_each(|p| fifo.push(p, 0));
        assert_eq!([fifo.pop(), fifo.pop(), fifo.pop()], [Some(a), Some(b), Some(c)]);
        assert_eq!(fifo.pop(), None);

        let mut lifo = Lifo::default();
        [a, b, c].into_iter().for_each(|p| lifo.push(p, 0));
        assert_eq!([lifo.pop(), lifo.pop(), lifo.pop()], [Some(c), Some(b), Some(a)]);
        assert_eq!(lifo.pop(), None);
    }

    #[test]
    fn test_ranked_breaks_ties_row_major() {
        let goal = Position::new(5, 5);
        let mut ranked = Ranked::new(Rank::Cost, goal);
        ranked.push(Position::new(2, 0), 3);
        ranked.push(Position::new(1, 4), 3);
        ranked.push(Position::new(4, 4), 1);
        assert_eq!(ranked.pop(), Some(Position::new(4, 4)));
        assert_eq!(ranked.pop(), Some(Position::new(1, 4)));
        assert_eq!(ranked.pop(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_greedy_parent_is_latest_expander() {
        // (1,0) is first discovered from the start, then expanded again from the
        // dead end at (1,1) before it is popped
        let maze = crate::maze::tests::maze_from_codes(&[
            &[0, 0, 1],
            &[0, 0, 1],
            &[0, 1, 1],
            &[0, 0, 0],
        ]);
        let (start, goal) = (Position::new(0, 0), Position::new(3, 2));
        let p = Position::new;

        let greedy = traverse(&maze, start, goal, Ranked::new(Rank::Heuristic, goal));
        let trace = vec![p(0, 0), p(0, 1), p(1, 1), p(1, 0), p(2, 0), p(3, 0), p(3, 1), p(3, 2)];
        assert_eq!(greedy.explored, trace);
        assert_eq!(greedy.path, trace);

        // A cost-ranked frontier keeps the cheaper discoverer
        let dijkstra = traverse(&maze, start, goal, Ranked::new(Rank::Cost, goal));
        assert_eq!(
            dijkstra.path,
            vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(3, 1), p(3, 2)]
        );
    }

    #[test]
    fn test_ranked_keys() {
        let goal = Position::new(3, 3);
        let pos = Position::new(1, 0);
        assert_eq!(Ranked::new(Rank::Cost, goal).key(pos, 7), 7);
        assert_eq!(Ranked::new(Rank::Heuristic, goal).key(pos, 7), 5);
        assert_eq!(Ranked::new(Rank::CostPlusHeuristic, goal).key(pos, 7), 12);
    }
}
