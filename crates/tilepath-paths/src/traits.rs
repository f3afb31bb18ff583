use tilepath_core::{Cell, Grid};

/// Occupancy source a search runs against.
///
/// The searchable area is `[0, width) x [0, height)`. Implementors must not
/// change their answers while a search holds a reference to them.
pub trait Pather {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Whether `c` is in bounds and may be stepped on.
    fn is_passable(&self, c: Cell) -> bool;

    /// Whether `c` is in bounds.
    #[inline]
    fn contains(&self, c: Cell) -> bool {
        c.x < self.width() && c.y < self.height()
    }
}

impl Pather for Grid {
    #[inline]
    fn width(&self) -> u32 {
        Grid::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        Grid::height(self)
    }

    #[inline]
    fn is_passable(&self, c: Cell) -> bool {
        Grid::is_passable(self, c)
    }

    #[inline]
    fn contains(&self, c: Cell) -> bool {
        Grid::contains(self, c)
    }
}
