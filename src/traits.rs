//! Traits used across the crate
use rand::Rng;

use crate::estimate::EstimateTrace;
use crate::tally::HitTally;

/// Can generate random values of type `X`
pub trait Sampleable<X> {
    /// Single draw
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws
    ///
    /// Implementations must consume the generator exactly as `n` successive
    /// calls to `draw` would, so seeded runs reproduce across the two.
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }

    /// Never-ending stream of draws
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::geom::Square;
    /// use mcpi::traits::Sampleable;
    ///
    /// let sq = Square::unit();
    /// let mut rng = rand::thread_rng();
    ///
    /// let n_collected = sq.sample_stream(&mut rng).take(10).count();
    /// assert_eq!(n_collected, 10);
    /// ```
    fn sample_stream<'r, R: Rng>(
        &'r self,
        mut rng: &'r mut R,
    ) -> Box<dyn Iterator<Item = X> + 'r>
    where
        X: 'r,
    {
        Box::new(std::iter::repeat_with(move || self.draw(&mut rng)))
    }
}

/// Identifies the region of the plane an object covers
pub trait Support<X> {
    /// Returns `true` if `x` lies inside the region (boundary included)
    fn supports(&self, x: &X) -> bool;
}

/// Is a [sufficient statistic](https://en.wikipedia.org/wiki/Sufficient_statistic)
/// for a stream of observations.
///
/// # Example
///
/// ```
/// use mcpi::tally::HitTally;
/// use mcpi::traits::SuffStat;
///
/// // The hit tally tracks the number of points drawn, n, and the number
/// // that landed inside the circle.
/// let mut tally = HitTally::new();
///
/// assert!(tally.n() == 0 && tally.hits() == 0);
///
/// tally.observe(&true); // a point inside the circle
/// assert!(tally.n() == 1 && tally.hits() == 1);
///
/// tally.observe(&false); // a point outside
/// assert!(tally.n() == 2 && tally.hits() == 1);
///
/// tally.forget_many(&[false, true]);
/// assert!(tally.n() == 0 && tally.hits() == 0);
/// ```
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Forget several observations
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }
}

/// A Monte Carlo estimator of π.
///
/// The two implementations, [`StepwiseEstimator`](crate::estimate::StepwiseEstimator)
/// and [`BatchEstimator`](crate::estimate::BatchEstimator), organize the same
/// computation differently (one point at a time versus bulk arrays) and are
/// interchangeable: given identically seeded generators they produce
/// identical tallies and traces.
pub trait PiEstimator {
    /// Draw `n_samples` points and tally the in-circle hits
    fn tally<R: Rng>(&self, n_samples: usize, rng: &mut R) -> HitTally;

    /// Record the running estimate of π after each of `n_samples` draws
    fn trace<R: Rng>(&self, n_samples: usize, rng: &mut R) -> EstimateTrace;

    /// Estimate π from `n_samples` points
    ///
    /// Returns `None` when `n_samples` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::estimate::StepwiseEstimator;
    /// use mcpi::traits::PiEstimator;
    ///
    /// let mut rng = rand::thread_rng();
    /// let estimator = StepwiseEstimator::default();
    ///
    /// let est = estimator.estimate(10_000, &mut rng).unwrap();
    /// assert!((est - std::f64::consts::PI).abs() < 0.5);
    ///
    /// assert!(estimator.estimate(0, &mut rng).is_none());
    /// ```
    fn estimate<R: Rng>(&self, n_samples: usize, rng: &mut R) -> Option<f64> {
        self.tally(n_samples, rng).estimate()
    }
}
