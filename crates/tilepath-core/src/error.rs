//! Errors reported by [`Grid`](crate::Grid) construction and edits.

use crate::geom::Cell;

/// Errors that can occur when building or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// A cell lies outside `[0, width) x [0, height)`.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    InvalidCoordinate { cell: Cell, width: u32, height: u32 },
    /// An ASCII layout row has a different width than the first row.
    #[error("layout row {row} has width {found}, expected {expected}")]
    InconsistentRow {
        row: u32,
        expected: u32,
        found: u32,
    },
    /// An ASCII layout contains a character other than `#` or `.`.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
}
