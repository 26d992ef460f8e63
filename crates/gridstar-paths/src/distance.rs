use std::f64::consts::SQRT_2;

use gridstar_core::Point;

// Per-axis distances, widened so that any two `i32` coordinates fit.
#[inline]
fn deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(a.x) - i64::from(b.x)).abs(),
        (i64::from(a.y) - i64::from(b.y)).abs(),
    )
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Octile distance: the length of the shortest 8-connected path on an open
/// grid where orthogonal steps cost 1 and diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    let (dmin, dmax) = if dx < dy { (dx, dy) } else { (dy, dx) };
    SQRT_2 * dmin as f64 + (dmax - dmin) as f64
}

/// Squared Euclidean distance, saturating at `u64::MAX`.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> u64 {
    let (dx, dy) = deltas(a, b);
    let (dx, dy) = (dx.unsigned_abs(), dy.unsigned_abs());
    (dx * dx).saturating_add(dy * dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_metrics() {
        let a = Point::new(1, 2);
        let b = Point::new(4, -2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(squared_euclidean(a, b), 25);
    }

    #[test]
    fn octile_is_symmetric_and_mixes_steps() {
        let a = Point::new(7, 7);
        let b = Point::new(4, 5);
        // Two diagonal steps plus one straight step.
        let expected = 2.0 * SQRT_2 + 1.0;
        assert!((octile(a, b) - expected).abs() < 1e-12);
        assert_eq!(octile(a, b), octile(b, a));
        assert_eq!(octile(a, a), 0.0);
        assert_eq!(octile(Point::ZERO, Point::new(0, 5)), 5.0);
    }

    #[test]
    fn metrics_span_the_whole_coordinate_range() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        let span = i64::from(u32::MAX);
        assert_eq!(manhattan(lo, hi), 2 * span);
        assert_eq!(chebyshev(hi, lo), span);
        assert_eq!(squared_euclidean(lo, hi), u64::MAX);
        assert_eq!(
            squared_euclidean(lo, Point::new(i32::MAX, i32::MIN)),
            span as u64 * span as u64
        );
        assert!((octile(lo, hi) - SQRT_2 * span as f64).abs() < 1.0);
        let far = Point::new(i32::MIN, 0);
        let near = Point::new(4, 5);
        assert_eq!(octile(far, near), octile(near, far));
    }
}
