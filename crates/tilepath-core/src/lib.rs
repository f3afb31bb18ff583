//! **tilepath-core** — grid and cell types for tilepath.
//!
//! This crate provides the data a search runs against: the [`Cell`]
//! coordinate, the obstacle [`Grid`], ASCII layouts, and helpers that drop
//! endpoints and obstacles on random free cells.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod placement;

pub use error::GridError;
pub use geom::Cell;
pub use grid::Grid;
pub use placement::{random_endpoints, random_free_cell, scatter_obstacles};
