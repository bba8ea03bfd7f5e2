//! Circle inscribed in a sampling square
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::{Point, Square};
use crate::impl_display;
use crate::traits::Support;
use std::f64::consts::PI;

/// The circle inscribed in a [`Square`], sharing its center and touching all
/// four sides.
///
/// Membership is the in-circle test of the estimators. The circle cannot be
/// built directly; it comes from a square, so its parameters are always
/// valid.
///
/// # Example
///
/// ```
/// use mcpi::geom::{Point, Square};
///
/// let circle = Square::unit().inscribed_circle();
///
/// assert!(circle.contains(&Point::new(0.0, 0.0)));
/// assert!(circle.contains(&Point::new(1.0, 0.0)));
/// assert!(!circle.contains(&Point::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct InscribedCircle {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl InscribedCircle {
    /// Get the center point
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Get the radius, half the side of the enclosing square
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The area, πr²
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Determine whether a point lies in the circle. Points on the boundary
    /// count as inside.
    #[inline]
    pub fn contains(&self, pt: &Point) -> bool {
        pt.dist2(&self.center()) <= self.radius * self.radius
    }
}

impl From<&Square> for InscribedCircle {
    fn from(sq: &Square) -> Self {
        let center = sq.center();
        InscribedCircle {
            cx: center.x,
            cy: center.y,
            radius: sq.side() / 2.0,
        }
    }
}

impl From<&InscribedCircle> for String {
    fn from(circle: &InscribedCircle) -> String {
        format!(
            "InscribedCircle(({}, {}), radius {})",
            circle.cx, circle.cy, circle.radius
        )
    }
}

impl_display!(InscribedCircle);

impl Support<Point> for InscribedCircle {
    fn supports(&self, pt: &Point) -> bool {
        self.contains(pt)
    }
}
