//! Axis-aligned sampling square, the region points are drawn from
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::{InscribedCircle, Point};
use crate::impl_display;
use crate::traits::{Sampleable, Support};
use rand::Rng;
use std::fmt;

/// An axis-aligned square given by its center and side length.
///
/// The square is the sampling region of the estimators: points drawn
/// uniformly from it land inside the inscribed circle with probability π/4,
/// whatever the center and side, which is what makes the rejection-sampling
/// estimate work.
///
/// # Example
///
/// Draws always land within the bounds
///
/// ```
/// use mcpi::geom::Square;
/// use mcpi::traits::{Sampleable, Support};
///
/// let sq = Square::new(2.0, 2.0, 4.0).unwrap();
/// let mut rng = rand::thread_rng();
///
/// assert!(sq.sample(100, &mut rng).iter().all(|pt| sq.supports(pt)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Square {
    cx: f64,
    cy: f64,
    side: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SquareError {
    /// The side was zero, negative, or too small to span an interval at the
    /// given center
    SideTooLow { side: f64 },
    /// The side was infinite or NaN
    SideNotFinite { side: f64 },
    /// A center coordinate was infinite or NaN
    CenterNotFinite { cx: f64, cy: f64 },
}

impl Square {
    // a center far from the origin can swallow a small side
    fn spans_interval(cx: f64, cy: f64, side: f64) -> bool {
        let half = side / 2.0;
        cx - half < cx + half && cy - half < cy + half
    }

    /// Create a new square centered at (`cx`, `cy`) with the given side
    pub fn new(cx: f64, cy: f64, side: f64) -> Result<Self, SquareError> {
        if !(cx.is_finite() && cy.is_finite()) {
            Err(SquareError::CenterNotFinite { cx, cy })
        } else if !side.is_finite() {
            Err(SquareError::SideNotFinite { side })
        } else if side <= 0.0 || !Square::spans_interval(cx, cy, side) {
            Err(SquareError::SideTooLow { side })
        } else {
            Ok(Square::new_unchecked(cx, cy, side))
        }
    }

    /// Creates a new Square without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(cx: f64, cy: f64, side: f64) -> Self {
        Square { cx, cy, side }
    }

    /// The side-2 square centered at the origin, which inscribes the unit
    /// circle
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geom::Square;
    /// let sq = Square::unit();
    /// assert_eq!(sq.x_bounds(), (-1.0, 1.0));
    /// assert_eq!(sq.y_bounds(), (-1.0, 1.0));
    /// ```
    #[inline]
    pub fn unit() -> Self {
        Square::new_unchecked(0.0, 0.0, 2.0)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Get the side length
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geom::Square;
    /// let sq = Square::unit();
    /// assert_eq!(sq.side(), 2.0);
    /// ```
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Set the side length
    pub fn set_side(&mut self, side: f64) -> Result<(), SquareError> {
        if !side.is_finite() {
            Err(SquareError::SideNotFinite { side })
        } else if side <= 0.0
            || !Square::spans_interval(self.cx, self.cy, side)
        {
            Err(SquareError::SideTooLow { side })
        } else {
            self.set_side_unchecked(side);
            Ok(())
        }
    }

    /// Set the side length without input validation
    #[inline]
    pub fn set_side_unchecked(&mut self, side: f64) {
        self.side = side;
    }

    /// Set the center
    pub fn set_center(&mut self, cx: f64, cy: f64) -> Result<(), SquareError> {
        if !(cx.is_finite() && cy.is_finite()) {
            Err(SquareError::CenterNotFinite { cx, cy })
        } else if !Square::spans_interval(cx, cy, self.side) {
            Err(SquareError::SideTooLow { side: self.side })
        } else {
            self.set_center_unchecked(cx, cy);
            Ok(())
        }
    }

    /// Set the center without input validation
    #[inline]
    pub fn set_center_unchecked(&mut self, cx: f64, cy: f64) {
        self.cx = cx;
        self.cy = cy;
    }

    /// The (min, max) extent along the x axis
    #[inline]
    pub fn x_bounds(&self) -> (f64, f64) {
        let half = self.side / 2.0;
        (self.cx - half, self.cx + half)
    }

    /// The (min, max) extent along the y axis
    #[inline]
    pub fn y_bounds(&self) -> (f64, f64) {
        let half = self.side / 2.0;
        (self.cy - half, self.cy + half)
    }

    /// The area, side²
    #[inline]
    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    /// The circle inscribed in this square
    ///
    /// # Example
    ///
    /// The circle-to-square area ratio is π/4 regardless of the square
    ///
    /// ```
    /// # use mcpi::geom::Square;
    /// use std::f64::consts::PI;
    ///
    /// let sq = Square::new(2.0, 2.0, 4.0).unwrap();
    /// let circle = sq.inscribed_circle();
    ///
    /// let ratio = circle.area() / sq.area();
    /// assert!((4.0 * ratio - PI).abs() < 1E-12);
    /// ```
    #[inline]
    pub fn inscribed_circle(&self) -> InscribedCircle {
        InscribedCircle::from(self)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::unit()
    }
}

impl From<&Square> for String {
    fn from(sq: &Square) -> String {
        format!("Square(({}, {}), side {})", sq.cx, sq.cy, sq.side)
    }
}

impl_display!(Square);

impl Sampleable<Point> for Square {
    fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        let (xa, xb) = self.x_bounds();
        let (ya, yb) = self.y_bounds();
        let ux = rand_distr::Uniform::new(xa, xb);
        let uy = rand_distr::Uniform::new(ya, yb);
        Point::new(rng.sample(ux), rng.sample(uy))
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        let (xa, xb) = self.x_bounds();
        let (ya, yb) = self.y_bounds();
        let ux = rand_distr::Uniform::new(xa, xb);
        let uy = rand_distr::Uniform::new(ya, yb);
        (0..n)
            .map(|_| Point::new(rng.sample(ux), rng.sample(uy)))
            .collect()
    }
}

impl Support<Point> for Square {
    fn supports(&self, pt: &Point) -> bool {
        let (xa, xb) = self.x_bounds();
        let (ya, yb) = self.y_bounds();
        pt.x.is_finite()
            && pt.y.is_finite()
            && xa <= pt.x
            && pt.x <= xb
            && ya <= pt.y
            && pt.y <= yb
    }
}

impl std::error::Error for SquareError {}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideTooLow { side } => {
                write!(f, "side too low: {}", side)
            }
            Self::SideNotFinite { side } => {
                write!(f, "non-finite side: {}", side)
            }
            Self::CenterNotFinite { cx, cy } => {
                write!(f, "non-finite center: ({}, {})", cx, cy)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::misc::x2_test;
    use crate::test_basic_impls;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const TOL: f64 = 1E-12;
    const X2_PVAL: f64 = 0.2;
    const N_TRIES: usize = 5;

    test_basic_impls!(Square::unit());

    #[test]
    fn new() {
        let sq = Square::new(1.0, -1.0, 3.0).unwrap();
        assert::close(sq.center().x, 1.0, TOL);
        assert::close(sq.center().y, -1.0, TOL);
        assert::close(sq.side(), 3.0, TOL);
    }

    #[test]
    fn new_rejects_zero_or_negative_side() {
        assert!(Square::new(0.0, 0.0, 0.0).is_err());
        assert!(Square::new(0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn new_rejects_non_finite_params() {
        assert!(Square::new(f64::NAN, 0.0, 1.0).is_err());
        assert!(Square::new(0.0, f64::INFINITY, 1.0).is_err());
        assert!(Square::new(0.0, 0.0, f64::NAN).is_err());
        assert!(Square::new(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn new_rejects_side_that_vanishes_at_center_scale() {
        // 1e-8 is far below one ulp at 1e300
        assert!(Square::new(1e300, 0.0, 1e-8).is_err());
    }

    #[test]
    fn bounds() {
        let sq = Square::new(2.0, 2.0, 4.0).unwrap();
        assert_eq!(sq.x_bounds(), (0.0, 4.0));
        assert_eq!(sq.y_bounds(), (0.0, 4.0));
    }

    #[test]
    fn area() {
        let sq = Square::new(2.0, 2.0, 4.0).unwrap();
        assert::close(sq.area(), 16.0, TOL);
    }

    #[test]
    fn set_side() {
        let mut sq = Square::unit();
        sq.set_side(4.0).unwrap();
        assert::close(sq.side(), 4.0, TOL);
        assert!(sq.set_side(-1.0).is_err());
        assert!(sq.set_side(f64::NAN).is_err());
    }

    #[test]
    fn set_center() {
        let mut sq = Square::unit();
        sq.set_center(2.0, 3.0).unwrap();
        assert_eq!(sq.center(), Point::new(2.0, 3.0));
        assert!(sq.set_center(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn set_side_rejects_side_that_vanishes_at_center_scale() {
        let mut sq = Square::new(1e300, 0.0, 1e292).unwrap();
        assert_eq!(
            sq.set_side(1e-8),
            Err(SquareError::SideTooLow { side: 1e-8 })
        );
        assert_eq!(sq.side(), 1e292);
    }

    #[test]
    fn set_center_rejects_center_that_swallows_the_side() {
        let mut sq = Square::unit();
        assert_eq!(
            sq.set_center(1e300, 0.0),
            Err(SquareError::SideTooLow { side: 2.0 })
        );

        // the rejected update leaves the square intact, so it still draws
        assert_eq!(sq, Square::unit());
        let mut rng = SmallRng::seed_from_u64(0x1234);
        assert!(sq.supports(&sq.draw(&mut rng)));
    }

    #[test]
    fn default_is_unit() {
        assert_eq!(Square::default(), Square::unit());
    }

    #[test]
    fn display() {
        let sq = Square::unit();
        assert_eq!(sq.to_string(), String::from("Square((0, 0), side 2)"));
    }

    #[test]
    fn draws_are_supported() {
        let mut rng = rand::thread_rng();
        let sq = Square::new(-3.0, 5.0, 0.5).unwrap();
        for _ in 0..100 {
            let pt = sq.draw(&mut rng);
            assert!(sq.supports(&pt));
        }
    }

    #[test]
    fn sample_draws_the_correct_number_of_points() {
        let mut rng = SmallRng::seed_from_u64(0x1234);
        let pts = Square::unit().sample(103, &mut rng);
        assert_eq!(pts.len(), 103);
    }

    #[test]
    fn draw_quadrants_test() {
        let mut rng = rand::thread_rng();
        let sq = Square::unit();
        let ps = vec![0.25; 4];

        // test is flaky, try a few times
        let passes = (0..N_TRIES).fold(0, |acc, _| {
            let mut f_obs: Vec<u32> = vec![0; 4];
            for pt in sq.sample(1000, &mut rng) {
                let ix = match (pt.x < 0.0, pt.y < 0.0) {
                    (true, true) => 0,
                    (true, false) => 1,
                    (false, true) => 2,
                    (false, false) => 3,
                };
                f_obs[ix] += 1;
            }
            let (_, p) = x2_test(&f_obs, &ps);
            if p > X2_PVAL {
                acc + 1
            } else {
                acc
            }
        });
        assert!(passes > 0);
    }

    #[cfg(feature = "serde1")]
    #[test]
    fn serde_yaml_fixture() {
        use indoc::indoc;
        let yaml = indoc!(
            "
            ---
            cx: 2.0
            cy: 2.0
            side: 4.0
        "
        );
        let sq: Square = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sq, Square::new(2.0, 2.0, 4.0).unwrap());
    }
}
