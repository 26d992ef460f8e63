//! Built-in [`CostModel`]s.

use std::f64::consts::SQRT_2;

use gridstar_core::Point;

use crate::distance;
use crate::traits::CostModel;

#[inline]
fn octile_step(from: Point, to: Point) -> f64 {
    if from.is_orthogonal_to(to) { 1.0 } else { SQRT_2 }
}

/// Octile costs: orthogonal steps cost 1, diagonal steps cost √2, and the
/// heuristic is the exact octile distance. Admissible and consistent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Octile;

impl CostModel for Octile {
    #[inline]
    fn step_cost(&self, from: Point, to: Point) -> f64 {
        octile_step(from, to)
    }

    #[inline]
    fn heuristic(&self, from: Point, to: Point) -> f64 {
        distance::octile(from, to)
    }
}

/// Octile step costs with a squared Euclidean heuristic.
///
/// The heuristic overestimates, so it pulls searches hard toward the goal at
/// the price of optimality. The guess walkers in [`crate::walk`] score moves
/// with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl CostModel for SquaredEuclidean {
    #[inline]
    fn step_cost(&self, from: Point, to: Point) -> f64 {
        octile_step(from, to)
    }

    #[inline]
    fn heuristic(&self, from: Point, to: Point) -> f64 {
        distance::squared_euclidean(from, to) as f64
    }
}
