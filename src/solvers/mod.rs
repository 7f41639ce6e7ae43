use std::{convert::Infallible, str::FromStr, time::Duration, time::Instant};

use serde::{Serialize, Serializer};

mod bidirectional;
mod compare;
mod frontier;

pub use compare::{Comparison, compare, efficiency_score};
use frontier::{Fifo, Lifo, Rank, Ranked, traverse};

use crate::{
    error::MazeError,
    maze::{Grid, Maze, Position},
};

/// The search strategies, selectable by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    Greedy,
    Bidirectional,
    #[default]
    AStar,
}

impl Solver {
    /// Every strategy, in the order comparisons report them.
    pub const ALL: [Solver; 6] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::Dijkstra,
        Solver::Greedy,
        Solver::Bidirectional,
        Solver::AStar,
    ];

    /// The wire name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
            Solver::Dijkstra => "dijkstra",
            Solver::Greedy => "greedy",
            Solver::Bidirectional => "bidirectional",
            Solver::AStar => "astar",
        }
    }

    /// Looks a strategy up by its wire name, ignoring ASCII case.
    /// Unknown names select A*.
    pub fn from_name(name: &str) -> Solver {
        let name = name.trim();
        Solver::ALL
            .into_iter()
            .find(|solver| solver.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::warn!(name, "[solve] unknown algorithm, falling back to astar");
                Solver::AStar
            })
    }

    /// Whether the strategy always returns a shortest path on a unit-cost grid.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Solver::Dfs | Solver::Greedy)
    }

    fn explore(self, maze: &Maze, start: Position, end: Position) -> Exploration {
        match self {
            Solver::Bfs => traverse(maze, start, end, Fifo::default()),
            Solver::Dfs => traverse(maze, start, end, Lifo::default()),
            Solver::Dijkstra => traverse(maze, start, end, Ranked::new(Rank::Cost, end)),
            Solver::Greedy => traverse(maze, start, end, Ranked::new(Rank::Heuristic, end)),
            Solver::AStar => {
                traverse(maze, start, end, Ranked::new(Rank::CostPlusHeuristic, end))
            }
            Solver::Bidirectional => bidirectional::search(maze, start, end),
        }
    }
}

impl FromStr for Solver {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Solver::from_name(s))
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::Greedy => write!(f, "Greedy Best-First Search"),
            Solver::Bidirectional => write!(f, "Bidirectional BFS"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// Raw output of one strategy run, before timing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Exploration {
    /// Vertices in the order they were visited, each at most once.
    pub(crate) explored: Vec<Position>,
    /// `start ..= end`, or empty when the goal was not reached.
    pub(crate) path: Vec<Position>,
}

/// Follows parent links back from `end` until a vertex without a parent (the
/// search seed), and returns the positions seed-first.
pub(crate) fn reconstruct_path(parents: &Grid<Option<Position>>, end: Position) -> Vec<Position> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(parent) = parents[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Measurements of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Wall-clock time spent in the search, serialized as floating-point seconds.
    #[serde(rename = "time", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Number of explored positions.
    pub steps: usize,
    /// Number of positions on the path, endpoints included.
    pub path_length: usize,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// The outcome of [`solve`].
///
/// An empty `path` means the goal is unreachable; that is a normal result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub explored: Vec<Position>,
    pub path: Vec<Position>,
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl SearchResult {
    fn new(exploration: Exploration, elapsed: Duration) -> Self {
        let Exploration { explored, path } = exploration;
        let metrics = Metrics {
            elapsed,
            steps: explored.len(),
            path_length: path.len(),
        };
        SearchResult {
            explored,
            path,
            metrics,
        }
    }

    /// Whether the goal was reached.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The first half of the path (rounded down), for revealing part of a solution.
    pub fn hint(&self) -> &[Position] {
        &self.path[..self.path.len() / 2]
    }
}

/// Searches `maze` from `start` to `end` with the given strategy.
///
/// Both endpoints must lie inside the maze, otherwise
/// [`MazeError::InvalidEndpoint`] is returned before any searching. An
/// endpoint on a wall is unreachable, never an error. A wall `end` is searched
/// for like any other goal, so the trace covers everything reachable from
/// `start`; a wall `start` yields an empty trace.
pub fn solve(
    maze: &Maze,
    start: Position,
    end: Position,
    solver: Solver,
) -> Result<SearchResult, MazeError> {
    maze.check_endpoint(start)?;
    maze.check_endpoint(end)?;

    let timer = Instant::now();
    let exploration = if maze.is_open(start) {
        solver.explore(maze, start, end)
    } else {
        tracing::debug!(%start, %end, "[solve] start on a wall, goal is unreachable");
        Exploration::default()
    };
    let result = SearchResult::new(exploration, timer.elapsed());

    tracing::debug!(
        algorithm = solver.name(),
        %start,
        %end,
        steps = result.metrics.steps,
        path_length = result.metrics.path_length,
        elapsed_us = result.metrics.elapsed.as_micros() as u64,
        "[solve] search finished"
    );
    Ok(result)
}
