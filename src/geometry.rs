use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer pen coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, computed in floating point.
    #[inline(always)]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Component-wise average, truncated toward zero.
    #[inline(always)]
    pub fn midpoint(&self, other: &Point) -> Point {
        // The average of two i32 values always fits back into an i32.
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point {
            x: mid(self.x, other.x),
            y: mid(self.y, other.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Returns `None` for an empty point set.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
}
