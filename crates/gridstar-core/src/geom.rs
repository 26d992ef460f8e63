//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! A [`Point`] is a grid cell. [`Bounds`] describes the traversable
//! rectangle of a grid; its edge coordinates are walls, so only the strict
//! interior is traversable.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The eight single-step moves, in the order neighbors are generated:
/// orthogonal moves first, then diagonals.
pub const MOVES: [Point; 8] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether `other` is reached from `self` by an orthogonal move, i.e.
    /// the two points share a row or a column.
    #[inline]
    pub fn is_orthogonal_to(self, other: Point) -> bool {
        self.x == other.x || self.y == other.y
    }

    /// Whether `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let dx = (i64::from(other.x) - i64::from(self.x)).abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).abs();
        (dx, dy) != (0, 0) && dx <= 1 && dy <= 1
    }

    /// `self + d`, or `None` if either coordinate would leave the `i32`
    /// range.
    #[inline]
    pub fn checked_add(self, d: Point) -> Option<Point> {
        Some(Self::new(self.x.checked_add(d.x)?, self.y.checked_add(d.y)?))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A rectangle whose edge coordinates are off-limits.
///
/// A point is inside the bounds only if `min.x < x < max.x` and
/// `min.y < y < max.y`. Bounds of `(0, 8)` on both axes therefore leave the
/// 7×7 block `1..=7` traversable.
///
/// Deserialized bounds are canonicalized the same way as [`Bounds::new`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawBounds")
)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    min: Point,
    max: Point,
}

#[cfg(feature = "serde")]
impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Self::new(raw.min.x, raw.min.y, raw.max.x, raw.max.y)
    }
}

impl Bounds {
    /// Create bounds from two corners, canonicalizing so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Square bounds with the same edge values on both axes.
    #[inline]
    pub fn square(edge_min: i32, edge_max: i32) -> Self {
        Self::new(edge_min, edge_min, edge_max, edge_max)
    }

    /// Number of interior columns. Wide bounds can exceed `i32::MAX`.
    #[inline]
    pub fn width(self) -> i64 {
        (i64::from(self.max.x) - i64::from(self.min.x) - 1).max(0)
    }

    /// Number of interior rows.
    #[inline]
    pub fn height(self) -> i64 {
        (i64::from(self.max.y) - i64::from(self.min.y) - 1).max(0)
    }

    /// Number of interior cells, saturating at `usize::MAX`.
    #[inline]
    pub fn len(self) -> usize {
        let w = usize::try_from(self.width()).unwrap_or(usize::MAX);
        let h = usize::try_from(self.height()).unwrap_or(usize::MAX);
        w.saturating_mul(h)
    }

    /// Whether there is no interior cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether `p` lies strictly inside the edges.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Whether `p` sits exactly on one of the four edge coordinates.
    #[inline]
    pub fn on_edge(self, p: Point) -> bool {
        p.x == self.min.x || p.x == self.max.x || p.y == self.min.y || p.y == self.max.y
    }

    /// Row-major iterator over every interior point.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Point::new(self.min.x.saturating_add(1), self.min.y.saturating_add(1)),
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "]{}-{}[", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the interior points of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Point,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.max.x {
            self.cur.x = self.bounds.min.x + 1;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.max.y {
            return (0, Some(0));
        }
        // At most (2^32 - 2)^2 cells remain, which fits a u64.
        let w = self.bounds.width() as u64;
        let remaining_in_row = (i64::from(self.bounds.max.x) - i64::from(self.cur.x)) as u64;
        let remaining_rows = (i64::from(self.bounds.max.y) - i64::from(self.cur.y) - 1) as u64;
        match usize::try_from(remaining_in_row + remaining_rows * w) {
            Ok(total) => (total, Some(total)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_equality_is_by_value() {
        let mut set = HashSet::new();
        set.insert(Point::new(3, 4));
        assert!(set.contains(&Point::from((3, 4))));
        assert!(!set.contains(&Point::new(4, 3)));
    }

    #[test]
    fn point_order_is_row_major() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 2), Point::new(1, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1), Point::new(0, 2)]);
    }

    #[test]
    fn moves_are_unique_unit_steps() {
        let set: HashSet<_> = MOVES.iter().copied().collect();
        assert_eq!(set.len(), 8);
        assert!(MOVES.iter().all(|&m| Point::ZERO.is_adjacent(m)));
        // Orthogonal moves come first.
        assert!(MOVES[..4].iter().all(|&m| Point::ZERO.is_orthogonal_to(m)));
        assert!(MOVES[4..].iter().all(|&m| !Point::ZERO.is_orthogonal_to(m)));
    }

    #[test]
    fn bounds_exclude_edges() {
        let b = Bounds::square(0, 8);
        assert!(b.contains(Point::new(1, 1)));
        assert!(b.contains(Point::new(7, 7)));
        assert!(!b.contains(Point::new(0, 4)));
        assert!(!b.contains(Point::new(8, 4)));
        assert!(!b.contains(Point::new(4, 0)));
        assert!(!b.contains(Point::new(4, 8)));
        assert!(!b.contains(Point::new(9, 4)));
        assert!(b.on_edge(Point::new(8, 3)));
        assert!(!b.on_edge(Point::new(9, 3)));
    }

    #[test]
    fn bounds_auto_canonicalize() {
        let b = Bounds::new(8, 5, 0, 0);
        assert_eq!(b.min, Point::new(0, 0));
        assert_eq!(b.max, Point::new(8, 5));
        assert_eq!(b.width(), 7);
        assert_eq!(b.height(), 4);
    }

    #[test]
    fn bounds_iter_interior() {
        let b = Bounds::new(0, 0, 4, 3);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), b.len());
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(1, 1));
        assert_eq!(pts[5], Point::new(3, 2));
        assert_eq!(b.iter().size_hint(), (6, Some(6)));
    }

    #[test]
    fn zero_size_bounds_are_empty() {
        for b in [Bounds::square(0, 0), Bounds::square(0, 1), Bounds::new(0, 0, 5, 1)] {
            assert!(b.is_empty());
            assert_eq!(b.len(), 0);
            assert_eq!(b.iter().count(), 0);
        }
        // Two apart leaves a single interior cell.
        let one = Bounds::square(0, 2);
        assert!(!one.is_empty());
        assert_eq!(one.iter().collect::<Vec<_>>(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let b = Bounds::new(i32::MIN, 0, i32::MAX, 5);
        assert_eq!(b.width(), i64::from(u32::MAX) - 1);
        assert_eq!(b.height(), 4);
        assert_eq!(b.len() as u64, (u64::from(u32::MAX) - 1) * 4);
        assert!(!b.is_empty());
        let mut it = b.iter();
        assert_eq!(it.next(), Some(Point::new(i32::MIN + 1, 1)));
        assert_eq!(it.next(), Some(Point::new(i32::MIN + 2, 1)));

        let full = Bounds::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert!(full.len() > 0);
        assert_eq!(full.iter().size_hint().1, Some(full.len()));
        assert!(full.contains(Point::ZERO));

        // A degenerate box pinned at the top of the range.
        let top = Bounds::square(i32::MAX, i32::MAX);
        assert!(top.is_empty());
        assert_eq!(top.iter().next(), None);
    }

    #[test]
    fn adjacency_and_checked_add_at_the_range_limits() {
        let corner = Point::new(i32::MAX, i32::MIN);
        assert!(!corner.is_adjacent(Point::new(i32::MIN, i32::MAX)));
        assert!(corner.is_adjacent(Point::new(i32::MAX - 1, i32::MIN + 1)));
        assert_eq!(corner.checked_add(Point::new(1, 0)), None);
        assert_eq!(corner.checked_add(Point::new(0, -1)), None);
        assert_eq!(
            corner.checked_add(Point::new(-1, 1)),
            Some(Point::new(i32::MAX - 1, i32::MIN + 1))
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn reversed_bounds_are_canonicalized() {
        let json = r#"{"min":{"x":8,"y":5},"max":{"x":0,"y":0}}"#;
        let b: Bounds = serde_json::from_str(json).unwrap();
        assert_eq!(b, Bounds::new(0, 0, 8, 5));
        assert_eq!(b.width(), 7);
        assert_eq!(b.iter().count(), 28);

        let back: Bounds = serde_json::from_str(&serde_json::to_string(&b).unwrap()).unwrap();
        assert_eq!(back, b);
    }
}
