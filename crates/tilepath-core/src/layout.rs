//! ASCII grid layouts.
//!
//! One line per row, `#` for an obstacle and `.` for a free cell:
//!
//! ```text
//! ..#..
//! ..#..
//! .....
//! ```
//!
//! Leading and trailing whitespace is trimmed from the whole string but not
//! from individual lines. Every row must have the same width.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Cell;
use crate::grid::Grid;

/// Character for a blocked cell.
pub const BLOCKED: char = '#';
/// Character for a free cell.
pub const FREE: char = '.';

impl Grid {
    /// Parse a grid from an ASCII layout.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let rows: Vec<&str> = s.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let height = if s.is_empty() { 0 } else { rows.len() as u32 };

        let mut grid = Grid::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count() as u32;
            if found != width {
                return Err(GridError::InconsistentRow {
                    row: y as u32,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = Cell::new(x as u32, y as u32);
                match ch {
                    BLOCKED => grid.set_blocked(cell, true)?,
                    FREE => {}
                    _ => return Err(GridError::InvalidChar { ch, cell }),
                }
            }
        }
        Ok(grid)
    }

    /// Render the grid as an ASCII layout accepted by
    /// [`from_ascii`](Self::from_ascii).
    pub fn to_ascii(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let ch = if self.is_passable(Cell::new(x, y)) {
                    FREE
                } else {
                    BLOCKED
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: &str = "\
.#.
.#.
.#.";

    #[test]
    fn parse_and_size() {
        let g = Grid::from_ascii(WALL).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.blocked_count(), 3);
        assert_eq!(g.is_blocked(Cell::new(1, 2)), Ok(true));
        assert_eq!(g.is_blocked(Cell::new(0, 2)), Ok(false));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let g: Grid = "\n\n..#\n...\n\n".parse().unwrap();
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g.is_blocked(Cell::new(2, 0)), Ok(true));
    }

    #[test]
    fn display_round_trip() {
        let g = Grid::from_ascii(WALL).unwrap();
        assert_eq!(g.to_ascii(), WALL);
        assert_eq!(Grid::from_ascii(&g.to_ascii()).unwrap(), g);
    }

    #[test]
    fn inconsistent_row_is_rejected() {
        assert_eq!(
            Grid::from_ascii("...\n..\n..."),
            Err(GridError::InconsistentRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char_is_rejected() {
        assert_eq!(
            Grid::from_ascii("..\n.x"),
            Err(GridError::InvalidChar {
                ch: 'x',
                cell: Cell::new(1, 1)
            })
        );
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert!(matches!(
            Grid::from_ascii("  \n "),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
