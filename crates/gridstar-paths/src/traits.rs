use gridstar_core::{Grid, Point};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` may be occupied at all. Only consulted when endpoint
    /// validation is enabled.
    fn passable(&self, _p: Point) -> bool {
        true
    }
}

/// Step costs and remaining-distance estimates between cells.
pub trait CostModel {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn step_cost(&self, from: Point, to: Point) -> f64;

    /// Heuristic estimate of distance from `from` to `to`.
    /// A* only guarantees optimal paths when this never overestimates.
    fn heuristic(&self, from: Point, to: Point) -> f64;
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }
}

impl<T: Pather + ?Sized> Pather for &T {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf);
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        (**self).passable(p)
    }
}
