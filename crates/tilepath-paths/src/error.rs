use std::fmt;

use tilepath_core::Cell;

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors rejected before a search starts.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::Unreachable`](crate::SearchOutcome::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The start or end cell lies outside the grid.
    #[error("{endpoint} cell {cell} is outside the {width}x{height} grid")]
    InvalidCoordinate {
        endpoint: Endpoint,
        cell: Cell,
        width: u32,
        height: u32,
    },
}
