//! Immutable traversability grid.
//!
//! A [`Grid`] is a [`Bounds`] plus a set of blocked cells. It answers the
//! two questions a search needs: whether a cell may be entered, and which
//! cells can be reached from a given cell in one move.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom::{Bounds, MOVES, Point};

/// A bounded grid with blocked cells.
///
/// Blocked cells may lie anywhere, including outside the bounds, where they
/// are redundant. Nothing about a grid changes after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Bounds,
    blocked: BTreeSet<Point>,
}

impl Grid {
    /// Create a grid from its bounds and blocked cells.
    pub fn new(bounds: Bounds, blocked: impl IntoIterator<Item = Point>) -> Self {
        Self {
            bounds,
            blocked: blocked.into_iter().collect(),
        }
    }

    /// Parse a text maze.
    ///
    /// One row per line; `.` or `0` is open, `#` or `1` is blocked. The
    /// character at row `r`, column `c` becomes [`Point`] `(c, r)`, and the
    /// bounds are placed one step outside the text so every parsed cell is
    /// interior. Leading and trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(GridError::Empty),
        };

        let width = rows[0].chars().count();
        let mut blocked = BTreeSet::new();
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' | '0' => {}
                    '#' | '1' => {
                        blocked.insert(pos);
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }

        Ok(Self {
            bounds: Bounds::new(-1, -1, width as i32, rows.len() as i32),
            blocked,
        })
    }

    /// The grid's bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Blocked cells in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Point> + '_ {
        self.blocked.iter().copied()
    }

    /// Whether `p` is listed as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    /// Whether `p` is strictly inside the bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` can be entered: interior and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.contains(p) && !self.is_blocked(p)
    }

    /// Cells reachable from `p` in one move, in [`MOVES`] order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(MOVES.len());
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the cells reachable from `p` in one move to `buf`.
    ///
    /// The caller clears `buf` beforehand if needed. Moves that would leave
    /// the `i32` range are skipped.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            MOVES
                .iter()
                .filter_map(|&d| p.checked_add(d))
                .filter(|&n| self.is_passable(n)),
        );
    }
}

/// Errors that can occur when parsing a text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The text holds no rows.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.`, `0`, `#` or `1` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::new(Bounds::square(0, 8), [Point::new(2, 4), Point::new(5, 6)]);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
