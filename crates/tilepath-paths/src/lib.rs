//! A* shortest-path search for tilepath grids.
//!
//! The search runs on any [`Pather`] (implemented for
//! [`tilepath_core::Grid`]) with four orthogonal unit-cost moves and the
//! Manhattan heuristic:
//!
//! - [`find_path`] — one-shot search with the default configuration
//! - [`Pathfinder::find_path`] — the cell sequence, empty if unreachable
//! - [`Pathfinder::search`] — the full [`SearchOutcome`], with expansion
//!   counts and the limit from [`SearchConfig`]
//!
//! Each call owns its frontier and closed set; nothing is shared between
//! searches.

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod traits;

pub use astar::{Pathfinder, SearchOutcome, find_path};
pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use neighbors::Neighbors;
pub use traits::Pather;
