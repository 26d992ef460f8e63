//! Pathfinding on 8-connected grids.
//!
//! This crate searches [`gridstar_core::Grid`]s (or anything implementing
//! [`Pather`]):
//!
//! - **A\*** minimum-cost routes ([`PathFinder::find`], [`PathFinder::find_route`])
//! - **Guess walkers** that commit to one move at a time ([`walk`])
//!
//! Costs come from a [`CostModel`]. [`Octile`] charges 1 per orthogonal
//! step and √2 per diagonal step, with the exact octile distance as its
//! heuristic.
//!
//! ```
//! use gridstar_core::{Bounds, Grid, Point};
//! use gridstar_paths::{Octile, PathFinder};
//!
//! let grid = Grid::new(Bounds::square(0, 8), [Point::new(3, 3), Point::new(3, 4)]);
//! let path = PathFinder::new(Octile)
//!     .find(&grid, Point::new(1, 4), Point::new(6, 4))
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Point::new(1, 4)));
//! assert_eq!(path.last(), Some(&Point::new(6, 4)));
//! ```
//!
//! # Search behavior
//!
//! [`SearchConfig::default`] expands the lowest-`f` cell first (earliest
//! discovered on ties), keeps the parent each cell was first discovered
//! from, and never reopens closed cells. [`SearchConfig::strict`] switches
//! to textbook A*, which is optimal for admissible heuristics.

mod astar;
mod config;
mod cost;
mod distance;
mod error;
mod node;
mod traits;
pub mod walk;

pub use astar::{PathFinder, Route};
pub use config::{Relaxation, SearchConfig};
pub use cost::{Octile, SquaredEuclidean};
pub use distance::{chebyshev, manhattan, octile, squared_euclidean};
pub use error::{EndpointKind, PathError};
pub use traits::{CostModel, Pather};
pub use walk::{GreedyWalk, MutatingWalk, RandomWalk, Walk, Walker};
