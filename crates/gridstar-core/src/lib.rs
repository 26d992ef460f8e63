//! **gridstar-core** — core types for grid pathfinding.
//!
//! This crate provides the geometry and traversability types shared by the
//! *gridstar* crates: integer cells, edge-exclusive bounds, and an
//! immutable grid of blocked cells with 8-connected neighbor generation.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, BoundsIter, MOVES, Point};
pub use grid::{Grid, GridError};
