use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::{
    maze::{Grid, Maze, Position},
    solvers::SearchResult,
};

/// What a single maze cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    /// Visited by the search but not on the final path.
    Explored,
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Explored => "* ".with(Color::Blue),
            Tile::Route => "🟨".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Search output drawn on top of the maze. Later layers win: explored cells,
/// then the path, then the endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overlay<'a> {
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub explored: &'a [Position],
    pub path: &'a [Position],
}

impl<'a> Overlay<'a> {
    pub fn endpoints(start: Position, end: Position) -> Self {
        Overlay {
            start: Some(start),
            end: Some(end),
            ..Overlay::default()
        }
    }

    pub fn search(start: Position, end: Position, result: &'a SearchResult) -> Self {
        Overlay {
            start: Some(start),
            end: Some(end),
            explored: &result.explored,
            path: &result.path,
        }
    }
}

/// Resolves every cell of `maze` to the tile it is drawn as.
pub fn tiles(maze: &Maze, overlay: &Overlay) -> Grid<Tile> {
    let mut tiles = Grid::new(maze.rows(), maze.cols(), Tile::Wall);
    for (pos, cell) in maze.cells().iter() {
        if cell.is_path() {
            tiles[pos] = Tile::Open;
        }
    }

    let layers = [(overlay.explored, Tile::Explored), (overlay.path, Tile::Route)];
    for (positions, tile) in layers {
        for &pos in positions.iter().filter(|&&pos| maze.is_in_bounds(pos)) {
            tiles[pos] = tile;
        }
    }
    for (pos, tile) in [(overlay.start, Tile::Start), (overlay.end, Tile::Goal)] {
        if let Some(pos) = pos.filter(|&pos| maze.is_in_bounds(pos)) {
            tiles[pos] = tile;
        }
    }
    tiles
}

/// Draws the maze with its overlay to `out`, one line per row.
pub fn draw<W: Write>(out: &mut W, maze: &Maze, overlay: &Overlay) -> std::io::Result<()> {
    let tiles = tiles(maze, overlay);
    for row in tiles.iter_rows() {
        for tile in row {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}
