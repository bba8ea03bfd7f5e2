//! A point in the plane
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;

/// A point in ℝ²
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Squared Euclidean distance to `other`
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geom::Point;
    /// let origin = Point::new(0.0, 0.0);
    /// let pt = Point::new(3.0, 4.0);
    /// assert_eq!(pt.dist2(&origin), 25.0);
    /// ```
    #[inline]
    pub fn dist2(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(pt: Point) -> Self {
        (pt.x, pt.y)
    }
}

impl From<&Point> for String {
    fn from(pt: &Point) -> String {
        format!("({}, {})", pt.x, pt.y)
    }
}

impl_display!(Point);
