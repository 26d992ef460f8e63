//! Guess walkers: single-path local searches.
//!
//! Unlike [`PathFinder`](crate::PathFinder), a walker commits to one move at
//! a time and never backtracks. It may reach the goal along a poor route or
//! not at all. Three strategies are provided:
//!
//! - [`RandomWalk`]: uniformly random moves.
//! - [`GreedyWalk`]: always the unvisited neighbor with the lowest
//!   `g + h`.
//! - [`MutatingWalk`]: greedy, but when the best move would raise `f` it
//!   takes one random step instead and carries on.
//!
//! Every walk is capped at `max_steps` moves.

use std::collections::HashSet;

use gridstar_core::Point;
use log::{debug, trace};
use rand::{Rng, RngExt};

use crate::cost::SquaredEuclidean;
use crate::traits::{CostModel, Pather};

/// Default cap on the number of moves in a walk.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// The outcome of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Visited cells in order, starting with the start cell.
    pub path: Vec<Point>,
    /// Whether the last cell is the goal.
    pub reached: bool,
}

impl Walk {
    /// Number of moves made.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A strategy producing a [`Walk`] from `start` toward `goal`.
pub trait Walker {
    fn walk<P: Pather>(&self, pather: &P, start: Point, goal: Point, rng: &mut impl Rng) -> Walk;
}

// ---------------------------------------------------------------------------
// RandomWalk
// ---------------------------------------------------------------------------

/// Moves to a uniformly random neighbor each step. Cells may be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomWalk {
    pub max_steps: usize,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Walker for RandomWalk {
    fn walk<P: Pather>(&self, pather: &P, start: Point, goal: Point, rng: &mut impl Rng) -> Walk {
        let mut path = vec![start];
        let mut current = start;
        let mut nbuf = Vec::with_capacity(8);

        while current != goal && path.len() <= self.max_steps {
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            if nbuf.is_empty() {
                break;
            }
            current = nbuf[rng.random_range(0..nbuf.len())];
            path.push(current);
        }

        let walk = Walk {
            path,
            reached: current == goal,
        };
        debug!(
            "random walk: {} steps, reached={}",
            walk.steps(),
            walk.reached
        );
        walk
    }
}

// ---------------------------------------------------------------------------
// Greedy walks
// ---------------------------------------------------------------------------

/// A scored candidate move.
#[derive(Clone, Copy, Debug)]
struct Step {
    to: Point,
    g: f64,
    f: f64,
}

/// Shared state of the greedy walkers.
struct Trail<'a, P, C> {
    pather: &'a P,
    cost: &'a C,
    goal: Point,
    path: Vec<Point>,
    visited: HashSet<Point>,
    current: Point,
    g: f64,
    nbuf: Vec<Point>,
}

impl<'a, P: Pather, C: CostModel> Trail<'a, P, C> {
    fn new(pather: &'a P, cost: &'a C, start: Point, goal: Point) -> Self {
        Self {
            pather,
            cost,
            goal,
            path: vec![start],
            visited: HashSet::from([start]),
            current: start,
            g: 0.0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Refill `nbuf` with the unvisited neighbors of the current cell.
    fn fresh_neighbors(&mut self) {
        self.nbuf.clear();
        self.pather.neighbors(self.current, &mut self.nbuf);
        let visited = &self.visited;
        self.nbuf.retain(|p| !visited.contains(p));
    }

    /// Lowest-`f` move among `nbuf`; the first one wins ties.
    fn best(&self) -> Option<Step> {
        let mut best: Option<Step> = None;
        for &to in &self.nbuf {
            let g = self.g + self.cost.step_cost(self.current, to);
            let f = g + self.cost.heuristic(to, self.goal);
            if best.is_none_or(|b| f < b.f) {
                best = Some(Step { to, g, f });
            }
        }
        best
    }

    fn advance(&mut self, step: Step) {
        self.visited.insert(step.to);
        self.path.push(step.to);
        self.current = step.to;
        self.g = step.g;
    }

    fn done(&self, max_steps: usize) -> bool {
        self.current == self.goal || self.path.len() > max_steps
    }

    fn finish(self) -> Walk {
        Walk {
            reached: self.current == self.goal,
            path: self.path,
        }
    }
}

/// Always moves to the unvisited neighbor with the lowest `g + h`, where
/// `g` accumulates step costs along the walk. Stops when no unvisited
/// neighbor remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyWalk<C = SquaredEuclidean> {
    pub cost: C,
    pub max_steps: usize,
}

impl<C: CostModel> GreedyWalk<C> {
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Default for GreedyWalk<SquaredEuclidean> {
    fn default() -> Self {
        Self::new(SquaredEuclidean)
    }
}

impl<C: CostModel> Walker for GreedyWalk<C> {
    fn walk<P: Pather>(&self, pather: &P, start: Point, goal: Point, _rng: &mut impl Rng) -> Walk {
        let mut trail = Trail::new(pather, &self.cost, start, goal);
        while !trail.done(self.max_steps) {
            trail.fresh_neighbors();
            let Some(step) = trail.best() else {
                break;
            };
            trail.advance(step);
        }

        let walk = trail.finish();
        debug!(
            "greedy walk: {} steps, reached={}",
            walk.steps(),
            walk.reached
        );
        walk
    }
}

/// Greedy descent with random escapes.
///
/// Moves like [`GreedyWalk`] while the best move does not raise `f` above
/// the current cell's `f`. Otherwise it takes one random unvisited neighbor
/// (charged a flat `g` increment of 1) and resumes the descent from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutatingWalk<C = SquaredEuclidean> {
    pub cost: C,
    pub max_steps: usize,
}

impl<C: CostModel> MutatingWalk<C> {
    pub fn new(cost: C) -> Self {
        Self {
            cost,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl Default for MutatingWalk<SquaredEuclidean> {
    fn default() -> Self {
        Self::new(SquaredEuclidean)
    }
}

impl<C: CostModel> Walker for MutatingWalk<C> {
    fn walk<P: Pather>(&self, pather: &P, start: Point, goal: Point, rng: &mut impl Rng) -> Walk {
        let mut trail = Trail::new(pather, &self.cost, start, goal);
        // The start cell has no score to beat.
        let mut current_f: Option<f64> = None;
        let mut mutations = 0usize;

        while !trail.done(self.max_steps) {
            trail.fresh_neighbors();
            let Some(best) = trail.best() else {
                break;
            };

            let step = if current_f.is_some_and(|f| best.f > f) {
                let to = trail.nbuf[rng.random_range(0..trail.nbuf.len())];
                let g = trail.g + 1.0;
                let f = g + self.cost.heuristic(to, goal);
                trace!("mutating walk: blocked at {}, jumping to {to}", trail.current);
                mutations += 1;
                Step { to, g, f }
            } else {
                best
            };

            current_f = Some(step.f);
            trail.advance(step);
        }

        let walk = trail.finish();
        debug!(
            "mutating walk: {} steps, {mutations} mutations, reached={}",
            walk.steps(),
            walk.reached
        );
        walk
    }
}
