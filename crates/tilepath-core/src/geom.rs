//! Geometry primitive: [`Cell`].
//!
//! Cells are plain integer grid coordinates. Any mapping to world or screen
//! space belongs to the caller.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. `x` is the column (grows right), `y` is the row
/// (grows down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours in the order left, right, up, down.
    ///
    /// Neighbours that would need a negative coordinate are `None`; the upper
    /// bounds are left to the grid.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Cell>; 4] {
        [
            self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            self.y.checked_add(1).map(|y| Self::new(self.x, y)),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Cell {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (u32, u32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}
