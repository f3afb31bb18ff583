//! The obstacle grid.
//!
//! [`Grid`] owns fixed bounds and a mutable set of blocked cells, stored as a
//! row-major occupancy buffer. It is the only state a search reads.

use crate::error::GridError;
use crate::geom::Cell;

/// A fixed-size grid with a mutable set of blocked cells.
///
/// Every blocked cell lies inside `[0, width) x [0, height)`. Cloning a grid
/// takes a snapshot of its occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
    nblocked: usize,
}

impl Grid {
    /// Create an empty grid of the given size.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            blocked: vec![false; len],
            nblocked: 0,
        })
    }

    /// Width of the grid (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether the cell lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Convert a cell to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// Convert a flat row-major index back to a cell. Returns `None` if
    /// `idx >= self.len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        (idx < self.len()).then(|| self.cell_at(idx))
    }

    #[inline]
    fn cell_at(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((idx % w) as u32, (idx / w) as u32)
    }

    /// Whether the cell holds an obstacle.
    ///
    /// Fails with [`GridError::InvalidCoordinate`] if the cell is out of
    /// bounds.
    pub fn is_blocked(&self, c: Cell) -> Result<bool, GridError> {
        let idx = self.checked_index(c)?;
        Ok(self.blocked[idx])
    }

    /// Whether the cell is inside the grid and free. Never fails.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| !self.blocked[i])
    }

    /// Add (`true`) or remove (`false`) an obstacle.
    ///
    /// Out-of-bounds cells are rejected and leave the grid unchanged.
    pub fn set_blocked(&mut self, c: Cell, blocked: bool) -> Result<(), GridError> {
        let idx = self.checked_index(c)?;
        let slot = &mut self.blocked[idx];
        if *slot != blocked {
            *slot = blocked;
            if blocked {
                self.nblocked += 1;
            } else {
                self.nblocked -= 1;
            }
            log::trace!("cell {c} blocked={blocked}");
        }
        Ok(())
    }

    /// Number of blocked cells.
    #[inline]
    pub fn blocked_count(&self) -> usize {
        self.nblocked
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        self.blocked.fill(false);
        self.nblocked = 0;
    }

    /// Iterate over blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.cell_at(i))
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(|i| self.cell_at(i))
    }

    fn checked_index(&self, c: Cell) -> Result<usize, GridError> {
        self.index(c).ok_or(GridError::InvalidCoordinate {
            cell: c,
            width: self.width,
            height: self.height,
        })
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: u32,
    height: u32,
    blocked: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            blocked: self.blocked_cells().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let repr = GridRepr::deserialize(deserializer)?;
        let mut grid = Grid::new(repr.width, repr.height).map_err(D::Error::custom)?;
        for c in repr.blocked {
            grid.set_blocked(c, true).map_err(D::Error::custom)?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5).unwrap();
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn contains_is_half_open() {
        let g = Grid::new(3, 2).unwrap();
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(2, 1)));
        assert!(!g.contains(Cell::new(3, 0)));
        assert!(!g.contains(Cell::new(0, 2)));
    }

    #[test]
    fn set_and_query_blocked() {
        let mut g = Grid::new(4, 4).unwrap();
        let c = Cell::new(2, 3);
        g.set_blocked(c, true).unwrap();
        assert_eq!(g.is_blocked(c), Ok(true));
        assert_eq!(g.is_blocked(Cell::new(0, 0)), Ok(false));
        assert!(!g.is_passable(c));
        assert_eq!(g.blocked_count(), 1);

        // Setting twice does not double count.
        g.set_blocked(c, true).unwrap();
        assert_eq!(g.blocked_count(), 1);

        g.set_blocked(c, false).unwrap();
        assert_eq!(g.is_blocked(c), Ok(false));
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut g = Grid::new(2, 2).unwrap();
        let c = Cell::new(2, 0);
        let err = GridError::InvalidCoordinate {
            cell: c,
            width: 2,
            height: 2,
        };
        assert_eq!(g.is_blocked(c), Err(err.clone()));
        assert_eq!(g.set_blocked(c, true), Err(err));
        assert_eq!(g.blocked_count(), 0);
        assert!(!g.is_passable(c));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(5, 3).unwrap();
        for c in g.cells() {
            let i = g.index(c).unwrap();
            assert_eq!(g.cell(i), Some(c));
        }
        assert_eq!(g.index(Cell::new(1, 2)), Some(11));
        assert_eq!(g.cell(14), Some(Cell::new(4, 2)));
        assert_eq!(g.cell(15), None);
    }

    #[test]
    fn blocked_cells_row_major_and_clear() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_blocked(Cell::new(0, 2), true).unwrap();
        g.set_blocked(Cell::new(2, 0), true).unwrap();
        let cells: Vec<_> = g.blocked_cells().collect();
        assert_eq!(cells, vec![Cell::new(2, 0), Cell::new(0, 2)]);

        g.clear_obstacles();
        assert_eq!(g.blocked_count(), 0);
        assert_eq!(g.blocked_cells().count(), 0);
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut g = Grid::new(3, 3).unwrap();
        let snap = g.clone();
        g.set_blocked(Cell::new(1, 1), true).unwrap();
        assert_eq!(snap.is_blocked(Cell::new(1, 1)), Ok(false));
    }
}
