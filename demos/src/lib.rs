//! Scenario setup shared by the `tilepath-demo` binary.
//!
//! Plays the part of the caller around the engine: it builds a grid from a
//! layout file or random obstacles, picks the endpoints, and formats the
//! resulting cell sequence.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use rand::Rng;
use tilepath_core::{
    Cell, Grid, GridError, random_endpoints, random_free_cell, scatter_obstacles,
};
use tilepath_paths::SearchConfig;

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(name = "tilepath-demo")]
#[command(version, about = "Find a shortest four-connected path on an obstacle grid")]
pub struct Args {
    /// Grid width (ignored with --layout)
    #[arg(long, default_value_t = 20)]
    pub width: u32,

    /// Grid height (ignored with --layout)
    #[arg(long, default_value_t = 20)]
    pub height: u32,

    /// Probability that a random cell is blocked (ignored with --layout)
    #[arg(long, default_value_t = 0.2)]
    pub density: f64,

    /// Random seed; drawn from the OS when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// ASCII layout file: '#' blocked, '.' free, one line per row
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Start cell as x,y; random free cell when omitted
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Cell>,

    /// End cell as x,y; random free cell when omitted
    #[arg(long, value_parser = parse_cell)]
    pub end: Option<Cell>,

    /// Give up after this many node expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the grid with the path drawn on it
    #[arg(long)]
    pub show_grid: bool,
}

impl Args {
    /// Search configuration selected by the flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_expansions: self.max_expansions,
        }
    }
}

/// Errors raised while setting up a scenario.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("cannot read layout {path}: {source}")]
    Layout {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("grid has fewer than two free cells to place endpoints")]
    NoFreeCells,
}

/// A grid plus the two endpoints to connect.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

/// Parse a cell written as `x,y`.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got \u{201c}{s}\u{201d}"))?;
    let x = x.trim().parse::<u32>().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse::<u32>().map_err(|e| format!("bad y: {e}"))?;
    Ok(Cell::new(x, y))
}

/// Build the grid and endpoints described by `args`.
///
/// Explicit endpoints are kept clear of random obstacles. Missing endpoints
/// are placed on random free cells distinct from the other endpoint.
pub fn build_scenario(args: &Args, rng: &mut impl Rng) -> Result<Scenario, DemoError> {
    let keep: Vec<Cell> = args.start.iter().chain(args.end.iter()).copied().collect();

    let grid = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| DemoError::Layout {
                path: path.clone(),
                source,
            })?;
            Grid::from_ascii(&text)?
        }
        None => {
            let mut grid = Grid::new(args.width, args.height)?;
            scatter_obstacles(&mut grid, rng, args.density, &keep);
            grid
        }
    };

    let (start, end) = match (args.start, args.end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => {
            let end = random_free_cell(&grid, rng, &[start]).ok_or(DemoError::NoFreeCells)?;
            (start, end)
        }
        (None, Some(end)) => {
            let start = random_free_cell(&grid, rng, &[end]).ok_or(DemoError::NoFreeCells)?;
            (start, end)
        }
        (None, None) => random_endpoints(&grid, rng).ok_or(DemoError::NoFreeCells)?,
    };
    log::info!(
        "scenario {}x{} with {} obstacles, {start} -> {end}",
        grid.width(),
        grid.height(),
        grid.blocked_count()
    );
    Ok(Scenario { grid, start, end })
}

/// One cell per line, or `no path` for an empty sequence.
pub fn format_path(path: &[Cell]) -> String {
    if path.is_empty() {
        return "no path\n".to_string();
    }
    let mut out = String::new();
    for c in path {
        let _ = writeln!(out, "{} {}", c.x, c.y);
    }
    out
}

/// The grid layout with the path drawn as `*`, `S` and `E`.
pub fn format_grid(grid: &Grid, path: &[Cell], start: Cell, end: Cell) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_ascii()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let mut mark = |c: Cell, ch: char| {
        if let Some(cell) = rows
            .get_mut(c.y as usize)
            .and_then(|r| r.get_mut(c.x as usize))
        {
            *cell = ch;
        }
    };
    for &c in path {
        mark(c, '*');
    }
    mark(start, 'S');
    mark(end, 'E');

    let mut out = String::new();
    for r in rows {
        out.extend(r);
        out.push('\n');
    }
    out
}
