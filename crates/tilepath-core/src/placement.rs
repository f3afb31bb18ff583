//! Random placement of endpoints and obstacles.
//!
//! Every function takes the caller's RNG so results are reproducible with a
//! seeded generator.

use rand::{Rng, RngExt};

use crate::geom::Cell;
use crate::grid::Grid;

/// Pick a uniformly random free cell that is not in `exclude`.
///
/// Returns `None` if no such cell exists.
pub fn random_free_cell(grid: &Grid, rng: &mut impl Rng, exclude: &[Cell]) -> Option<Cell> {
    let candidates: Vec<Cell> = grid
        .cells()
        .filter(|&c| grid.is_passable(c) && !exclude.contains(&c))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Pick two distinct random free cells to serve as start and end.
///
/// Returns `None` if the grid has fewer than two free cells.
pub fn random_endpoints(grid: &Grid, rng: &mut impl Rng) -> Option<(Cell, Cell)> {
    let start = random_free_cell(grid, rng, &[])?;
    let end = random_free_cell(grid, rng, &[start])?;
    Some((start, end))
}

/// Block each free cell not listed in `keep_clear` with probability
/// `density` (clamped to `[0, 1]`).
///
/// Returns the number of cells newly blocked.
pub fn scatter_obstacles(
    grid: &mut Grid,
    rng: &mut impl Rng,
    density: f64,
    keep_clear: &[Cell],
) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let candidates: Vec<Cell> = grid
        .cells()
        .filter(|&c| grid.is_passable(c) && !keep_clear.contains(&c))
        .collect();

    let mut placed = 0;
    for c in candidates {
        if rng.random_bool(density) && grid.set_blocked(c, true).is_ok() {
            placed += 1;
        }
    }
    log::debug!(
        "scattered {placed} obstacles on {}x{} grid (density {density})",
        grid.width(),
        grid.height()
    );
    placed
}
