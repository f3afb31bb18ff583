use tilepath_core::{Cell, Grid};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::{Endpoint, PathError};
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result of a single search.
///
/// `expanded` counts nodes taken off the frontier, the goal included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path, start and end included.
    Found { path: Vec<Cell>, expanded: usize },
    /// The frontier ran dry: no four-connected route exists.
    Unreachable { expanded: usize },
    /// The expansion limit was hit before the goal was reached.
    LimitReached { expanded: usize },
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Number of nodes expanded.
    #[inline]
    pub fn expanded(&self) -> usize {
        match *self {
            Self::Found { expanded, .. }
            | Self::Unreachable { expanded }
            | Self::LimitReached { expanded } => expanded,
        }
    }

    /// The path, or an empty vector if none was found.
    pub fn into_path(self) -> Vec<Cell> {
        match self {
            Self::Found { path, .. } => path,
            Self::Unreachable { .. } | Self::LimitReached { .. } => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A* shortest-path search over four-connected, unit-cost grids.
///
/// The pathfinder only holds configuration. Every call builds its own
/// frontier and closed set and drops them on return, so one `Pathfinder`
/// can serve any number of searches, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    /// Create a pathfinder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a shortest path from `start` to `end`.
    ///
    /// Returns the cells from `start` to `end` inclusive, or an empty vector
    /// if the goal is unreachable or the expansion limit was hit.
    pub fn find_path<P: Pather>(
        &self,
        pather: &P,
        start: Cell,
        end: Cell,
    ) -> Result<Vec<Cell>, PathError> {
        Ok(self.search(pather, start, end)?.into_path())
    }

    /// Run A* from `start` to `end` and report how the search ended.
    ///
    /// Ties on `f` go to the node with the lower heuristic, then to the one
    /// discovered first. Neighbours are generated left, right, up, down. A
    /// blocked start or end yields [`SearchOutcome::Unreachable`] without
    /// expanding anything.
    pub fn search<P: Pather>(
        &self,
        pather: &P,
        start: Cell,
        end: Cell,
    ) -> Result<SearchOutcome, PathError> {
        check_endpoint(pather, start, Endpoint::Start)?;
        check_endpoint(pather, end, Endpoint::End)?;

        if !pather.is_passable(start) || !pather.is_passable(end) {
            log::debug!("astar {start} -> {end}: blocked endpoint");
            return Ok(SearchOutcome::Unreachable { expanded: 0 });
        }

        let width = pather.width() as usize;
        let len = width * pather.height() as usize;
        let flat = |c: Cell| c.y as usize * width + c.x as usize;

        let mut frontier = Frontier::new(len);
        let mut closed = vec![false; len];
        let mut nb = Neighbors::new();
        let mut expanded = 0usize;

        frontier.insert_or_update(flat(start), start, 0, manhattan(start, end), None);

        let outcome = loop {
            if self.config.max_expansions.is_some_and(|max| expanded >= max) {
                break SearchOutcome::LimitReached { expanded };
            }
            let Some(ni) = frontier.pop() else {
                break SearchOutcome::Unreachable { expanded };
            };
            expanded += 1;

            let (cell, g) = {
                let node = frontier.node(ni);
                (node.cell, node.g)
            };
            closed[flat(cell)] = true;
            log::trace!("expand {cell} g={g} open={}", frontier.len());

            if cell == end {
                break SearchOutcome::Found {
                    path: frontier.path_to(ni),
                    expanded,
                };
            }

            for &n in nb.cardinal(cell, |c| pather.is_passable(c)) {
                let ci = flat(n);
                if closed[ci] {
                    continue;
                }
                let h = match frontier.get(ci) {
                    Some(existing) => existing.h,
                    None => manhattan(n, end),
                };
                frontier.insert_or_update(ci, n, g + 1, h, Some(ni));
            }
        };

        match &outcome {
            SearchOutcome::Found { path, expanded } => log::debug!(
                "astar {start} -> {end}: {} steps, {expanded} expanded",
                path.len() - 1
            ),
            SearchOutcome::Unreachable { expanded } => {
                log::debug!("astar {start} -> {end}: unreachable, {expanded} expanded")
            }
            SearchOutcome::LimitReached { expanded } => {
                log::debug!("astar {start} -> {end}: limit reached after {expanded} expansions")
            }
        }
        Ok(outcome)
    }
}

fn check_endpoint<P: Pather>(pather: &P, cell: Cell, endpoint: Endpoint) -> Result<(), PathError> {
    if pather.contains(cell) {
        return Ok(());
    }
    Err(PathError::InvalidCoordinate {
        endpoint,
        cell,
        width: pather.width(),
        height: pather.height(),
    })
}

/// Compute a shortest path on `grid` with the default configuration.
///
/// An empty vector means `end` cannot be reached from `start`.
pub fn find_path(grid: &Grid, start: Cell, end: Cell) -> Result<Vec<Cell>, PathError> {
    Pathfinder::default().find_path(grid, start, end)
}
