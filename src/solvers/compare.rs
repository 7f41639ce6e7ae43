use serde::Serialize;

use super::{Metrics, Solver, solve};
use crate::{
    error::MazeError,
    maze::{Maze, Position},
};

/// Metrics of one strategy in a [`compare`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub algorithm: Solver,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Runs every strategy on the same maze and endpoints, in [`Solver::ALL`] order.
pub fn compare(maze: &Maze, start: Position, end: Position) -> Result<Vec<Comparison>, MazeError> {
    Solver::ALL
        .into_iter()
        .map(|algorithm| {
            solve(maze, start, end, algorithm).map(|result| Comparison {
                algorithm,
                metrics: result.metrics,
            })
        })
        .collect()
}

/// Percentage score of a walk of `user_steps` cells against the best path length,
/// capped at 100. `None` when either count is zero.
pub fn efficiency_score(best_path_length: usize, user_steps: usize) -> Option<f64> {
    if best_path_length == 0 || user_steps == 0 {
        return None;
    }
    let score = best_path_length as f64 / user_steps as f64 * 100.0;
    Some(score.min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MazeConfig, generate_with};

    #[test]
    fn test_compare_runs_every_strategy() {
        let maze = generate_with(&MazeConfig::new(11, 15).with_seed(4)).unwrap();
        let results = compare(&maze, Position::ORIGIN, maze.exit()).unwrap();
        let algorithms: Vec<_> = results.iter().map(|c| c.algorithm).collect();
        assert_eq!(algorithms, Solver::ALL.to_vec());

        // A perfect maze has a single route, so every strategy finds the same length
        let lengths: Vec<_> = results.iter().map(|c| c.metrics.path_length).collect();
        assert!(lengths.iter().all(|&len| len == lengths[0] && len > 0));
    }

    #[test]
    fn test_compare_rejects_bad_endpoint() {
        let maze = generate_with(&MazeConfig::new(5, 5).with_seed(0)).unwrap();
        assert!(matches!(
            compare(&maze, Position::ORIGIN, Position::new(5, 5)),
            Err(MazeError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_comparison_json() {
        let maze = generate_with(&MazeConfig::new(3, 3).with_seed(0)).unwrap();
        let results = compare(&maze, Position::ORIGIN, maze.exit()).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[5]["algorithm"], "astar");
        assert_eq!(json[0]["algorithm"], "bfs");
        assert!(json[0]["time"].is_f64());
        assert_eq!(json[0]["path_length"], 5);
    }

    #[test]
    fn test_efficiency_score() {
        assert_eq!(efficiency_score(10, 20), Some(50.0));
        assert_eq!(efficiency_score(10, 10), Some(100.0));
        assert_eq!(efficiency_score(10, 5), Some(100.0));
        assert_eq!(efficiency_score(0, 5), None);
        assert_eq!(efficiency_score(5, 0), None);
    }
}
