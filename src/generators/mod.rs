use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Cell, Maze, Position},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Per-request generation settings.
///
/// Each generation call gets its own value, so concurrent callers never share
/// or overwrite each other's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for the carving shuffles. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Difficulty::Medium.config()
    }
}

impl MazeConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        MazeConfig {
            rows,
            cols,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Preset maze sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// `(rows, cols)` of the preset.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (10, 15),
            Difficulty::Medium => (25, 35),
            Difficulty::Hard => (40, 50),
        }
    }

    pub fn config(self) -> MazeConfig {
        let (rows, cols) = self.dimensions();
        MazeConfig::new(rows, cols)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        match self {
            Difficulty::Easy => write!(f, "Easy ({rows}x{cols})"),
            Difficulty::Medium => write!(f, "Medium ({rows}x{cols})"),
            Difficulty::Hard => write!(f, "Hard ({rows}x{cols})"),
        }
    }
}

/// Generates a perfect maze of `rows x cols` using OS randomness.
pub fn generate(rows: usize, cols: usize) -> Result<Maze, MazeError> {
    generate_with(&MazeConfig::new(rows, cols))
}

/// Generates a perfect maze as described by `config`.
pub fn generate_with(config: &MazeConfig) -> Result<Maze, MazeError> {
    let mut rng = get_rng(config.seed);
    generate_with_rng(config.rows, config.cols, &mut rng)
}

/// Generates a perfect maze drawing every shuffle from `rng`.
///
/// The same random sequence always yields the same maze. The origin and the
/// bottom-right corner are always open, whatever the parity of the dimensions.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(rows, cols)?;
    recursive_backtrack(&mut maze, rng);

    maze.set(Position::ORIGIN, Cell::Path);
    let exit = maze.exit();
    maze.set(exit, Cell::Path);
    if exit != Position::ORIGIN && maze.open_neighbors(exit).next().is_none() {
        // Both dimensions even: the exit sits off the lattice in both axes.
        // The cell above it joins it to the carved lattice cell at (row - 1, col - 1).
        maze.set(Position::new(exit.row - 1, exit.col), Cell::Path);
    }

    tracing::debug!(
        rows,
        cols,
        open_cells = maze.open_cells(),
        "[generate] carved maze"
    );
    Ok(maze)
}
