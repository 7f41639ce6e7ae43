use std::time::Duration;

use mazepath::{Difficulty, MazeConfig, MazeError, Position, Solver, compare, generate_with, logging};

/// Generates `num_iters` hard mazes and reports the average metrics of every strategy.
fn main() -> Result<(), MazeError> {
    let _log_guard = logging::init(None);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    let (rows, cols) = Difficulty::Hard.dimensions();
    let mut totals = [(Duration::ZERO, 0usize, 0usize); Solver::ALL.len()];

    for seed in 0..num_iters as u64 {
        let maze = generate_with(&MazeConfig::new(rows, cols).with_seed(seed))?;
        let results = compare(&maze, Position::ORIGIN, maze.exit())?;
        for (total, comparison) in totals.iter_mut().zip(&results) {
            total.0 += comparison.metrics.elapsed;
            total.1 += comparison.metrics.steps;
            total.2 += comparison.metrics.path_length;
        }
    }

    println!("{num_iters} mazes of {rows}x{cols}");
    for (solver, (elapsed, steps, path_length)) in Solver::ALL.iter().zip(totals) {
        println!(
            "{:<14} avg {:>10.3} ms {:>8} steps {:>6} path",
            solver.name(),
            elapsed.as_secs_f64() * 1000.0 / num_iters as f64,
            steps / num_iters,
            path_length / num_iters,
        );
    }
    Ok(())
}
