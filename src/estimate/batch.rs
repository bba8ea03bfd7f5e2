#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::estimate::EstimateTrace;
use crate::geom::{InscribedCircle, Point, Square};
use crate::impl_display;
use crate::misc::cumsum;
use crate::tally::HitTally;
use crate::traits::{PiEstimator, Sampleable};
use rand::Rng;

/// Estimates π with bulk array operations.
///
/// Samples every point up front and classifies them into a hit-indicator
/// vector. Cumulative sums of the indicators give the running hit counts,
/// so the trace is an array-wise map from counts to estimates. Produces
/// exactly the same numbers as
/// [`StepwiseEstimator`](crate::estimate::StepwiseEstimator) for the same
/// generator stream.
///
/// # Example
///
/// ```
/// use mcpi::estimate::BatchEstimator;
/// use mcpi::traits::PiEstimator;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
/// let estimator = BatchEstimator::default();
///
/// let trace = estimator.trace(1_000, &mut rng);
///
/// assert_eq!(trace.len(), 1_000);
/// assert!((trace.final_estimate().unwrap() - std::f64::consts::PI).abs() < 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct BatchEstimator {
    square: Square,
}

impl BatchEstimator {
    /// Create an estimator that samples the given square
    #[inline]
    pub fn new(square: Square) -> Self {
        BatchEstimator { square }
    }

    /// The square points are drawn from
    #[inline]
    pub fn square(&self) -> &Square {
        &self.square
    }

    /// The circle points are tested against
    #[inline]
    pub fn circle(&self) -> InscribedCircle {
        self.square.inscribed_circle()
    }

    /// Draw `n_samples` points paired with their in-circle flags.
    ///
    /// This is the raw material of the sample-scatter figure: hits and
    /// misses can be styled differently once classified.
    pub fn classified_sample<R: Rng>(
        &self,
        n_samples: usize,
        rng: &mut R,
    ) -> Vec<(Point, bool)> {
        let circle = self.circle();
        self.square
            .sample(n_samples, rng)
            .into_iter()
            .map(|pt| {
                let hit = circle.contains(&pt);
                (pt, hit)
            })
            .collect()
    }

    fn indicators<R: Rng>(&self, n_samples: usize, rng: &mut R) -> Vec<u32> {
        let circle = self.circle();
        self.square
            .sample(n_samples, rng)
            .iter()
            .map(|pt| u32::from(circle.contains(pt)))
            .collect()
    }
}

impl Default for BatchEstimator {
    fn default() -> Self {
        BatchEstimator::new(Square::unit())
    }
}

impl From<&BatchEstimator> for String {
    fn from(estimator: &BatchEstimator) -> String {
        format!("BatchEstimator({})", estimator.square)
    }
}

impl_display!(BatchEstimator);

impl PiEstimator for BatchEstimator {
    fn tally<R: Rng>(&self, n_samples: usize, rng: &mut R) -> HitTally {
        let hits = self
            .indicators(n_samples, rng)
            .iter()
            .map(|&hit| hit as usize)
            .sum();
        HitTally::from_parts_unchecked(n_samples, hits)
    }

    fn trace<R: Rng>(&self, n_samples: usize, rng: &mut R) -> EstimateTrace {
        let running = cumsum(&self.indicators(n_samples, rng));
        let estimates = running
            .iter()
            .enumerate()
            .map(|(ix, &hits)| 4.0 * (hits as f64 / (ix + 1) as f64))
            .collect();
        EstimateTrace::new(estimates)
    }
}
