use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::style::{Attribute, Color, Stylize};
use thiserror::Error;

use mazepath::{
    Difficulty, Maze, MazeConfig, MazeError, Position, Solver, compare, generate_with, logging,
    render::{self, Overlay},
    solve,
    solvers::efficiency_score,
};

#[derive(Parser, Debug)]
#[command(version, about, name = "mazepath")]
struct Cli {
    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
        /// Print the grid as nested 0/1 rows
        #[arg(long)]
        json: bool,
    },
    /// Solve a maze with one search strategy
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
        #[command(flatten)]
        endpoints: EndpointArgs,
        /// bfs, dfs, dijkstra, greedy, bidirectional or astar; anything else runs astar
        #[arg(short, long, default_value = "astar")]
        algorithm: String,
        /// Only reveal the first half of the path
        #[arg(long)]
        hint: bool,
        /// Print the search result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run every search strategy on the same maze and compare their metrics
    Compare {
        #[command(flatten)]
        maze: MazeArgs,
        #[command(flatten)]
        endpoints: EndpointArgs,
        /// Length of your own walk through the maze, scored against the shortest path
        #[arg(long)]
        user_steps: Option<usize>,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Args, Debug)]
struct MazeArgs {
    /// Load the grid from a JSON file of nested 0/1 rows instead of generating one
    #[arg(long, conflicts_with_all = ["rows", "cols", "difficulty", "seed"])]
    maze: Option<PathBuf>,
    /// Number of rows (overrides the difficulty preset)
    #[arg(long)]
    rows: Option<usize>,
    /// Number of columns (overrides the difficulty preset)
    #[arg(long)]
    cols: Option<usize>,
    /// Size preset, medium when nothing is given
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,
    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

impl MazeArgs {
    fn config(&self) -> MazeConfig {
        let preset = self
            .difficulty
            .map(|d| Difficulty::from(d).config())
            .unwrap_or_default();
        MazeConfig {
            rows: self.rows.unwrap_or(preset.rows),
            cols: self.cols.unwrap_or(preset.cols),
            seed: self.seed,
        }
    }

    fn load(&self) -> Result<Maze, CliError> {
        match &self.maze {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&text)?)
            }
            None => Ok(generate_with(&self.config())?),
        }
    }
}

#[derive(Args, Debug)]
struct EndpointArgs {
    /// Start cell as `row,col` [default: 0,0]
    #[arg(long)]
    start: Option<Position>,
    /// Goal cell as `row,col` [default: the bottom-right corner]
    #[arg(long)]
    end: Option<Position>,
}

impl EndpointArgs {
    fn resolve(&self, maze: &Maze) -> (Position, Position) {
        (
            self.start.unwrap_or(Position::ORIGIN),
            self.end.unwrap_or_else(|| maze.exit()),
        )
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_dir.as_deref());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!(
                "{}",
                format!("Error: {e}").with(Color::Red).attribute(Attribute::Bold)
            );
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::Generate { maze, json } => {
            let maze = maze.load()?;
            if json {
                serde_json::to_writer(&mut stdout, &maze)?;
                writeln!(stdout)?;
            } else {
                let overlay = Overlay::endpoints(Position::ORIGIN, maze.exit());
                render::draw(&mut stdout, &maze, &overlay)?;
            }
        }
        Command::Solve {
            maze,
            endpoints,
            algorithm,
            hint,
            json,
        } => {
            let maze = maze.load()?;
            let (start, end) = endpoints.resolve(&maze);
            let solver = Solver::from_name(&algorithm);
            let result = solve(&maze, start, end, solver)?;

            if json {
                serde_json::to_writer(&mut stdout, &result)?;
                writeln!(stdout)?;
                return Ok(());
            }

            let overlay = if hint {
                Overlay {
                    path: result.hint(),
                    ..Overlay::endpoints(start, end)
                }
            } else {
                Overlay::search(start, end, &result)
            };
            render::draw(&mut stdout, &maze, &overlay)?;

            let summary = if result.found() {
                format!(
                    "{solver}: path of {} cells, {} cells explored in {:.6}s\n",
                    result.metrics.path_length,
                    result.metrics.steps,
                    result.metrics.elapsed.as_secs_f64()
                )
                .with(Color::Green)
            } else {
                format!(
                    "{solver}: no path from {start} to {end}, {} cells explored\n",
                    result.metrics.steps
                )
                .with(Color::Yellow)
            };
            write!(stdout, "{}", summary.attribute(Attribute::Bold))?;
        }
        Command::Compare {
            maze,
            endpoints,
            user_steps,
            json,
        } => {
            let maze = maze.load()?;
            let (start, end) = endpoints.resolve(&maze);
            let results = compare(&maze, start, end)?;

            if json {
                serde_json::to_writer(&mut stdout, &results)?;
                writeln!(stdout)?;
                return Ok(());
            }

            writeln!(
                stdout,
                "{}",
                format!(
                    "{:<14} {:>12} {:>8} {:>12}",
                    "algorithm", "time (ms)", "steps", "path length"
                )
                .attribute(Attribute::Bold)
            )?;
            for comparison in &results {
                writeln!(
                    stdout,
                    "{:<14} {:>12.3} {:>8} {:>12}",
                    comparison.algorithm.name(),
                    comparison.metrics.elapsed.as_secs_f64() * 1000.0,
                    comparison.metrics.steps,
                    comparison.metrics.path_length
                )?;
            }

            if let Some(user_steps) = user_steps {
                let best = results
                    .iter()
                    .find(|c| c.algorithm == Solver::Bfs)
                    .map_or(0, |c| c.metrics.path_length);
                match efficiency_score(best, user_steps) {
                    Some(score) => writeln!(
                        stdout,
                        "{}",
                        format!("Efficiency score: {score:.1}").with(Color::Green)
                    )?,
                    None => writeln!(
                        stdout,
                        "{}",
                        "No score: the goal is unreachable or no steps were taken".with(Color::Yellow)
                    )?,
                }
            }
        }
    }
    Ok(())
}
