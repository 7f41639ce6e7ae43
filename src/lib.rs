//! Perfect maze generation and interchangeable grid search strategies.
//!
//! [`generators`] carves a perfect maze (every open cell reachable from the
//! origin, no cycles). [`solvers`] searches any [`Maze`] with one of six
//! strategies and reports the full exploration order, the path found and
//! timing metrics.

pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use generators::{Difficulty, MazeConfig, generate, generate_with, generate_with_rng};
pub use maze::{Cell, Maze, Position};
pub use solvers::{Comparison, Metrics, SearchResult, Solver, compare, solve};
