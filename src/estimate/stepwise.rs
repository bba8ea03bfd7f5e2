#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::estimate::EstimateTrace;
use crate::geom::{InscribedCircle, Square};
use crate::impl_display;
use crate::tally::HitTally;
use crate::traits::{PiEstimator, Sampleable, SuffStat};
use rand::Rng;

/// Estimates π one point at a time.
///
/// The explicit loop: draw a point and test it against the inscribed
/// circle, then update the tally. When tracing, each iteration also pushes
/// the running estimate. This is the reference implementation;
/// [`BatchEstimator`](crate::estimate::BatchEstimator) reorganizes the same
/// computation into bulk array operations.
///
/// # Example
///
/// ```
/// use mcpi::estimate::StepwiseEstimator;
/// use mcpi::geom::Square;
/// use mcpi::traits::PiEstimator;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
/// let square = Square::new(2.0, 2.0, 4.0).unwrap();
/// let estimator = StepwiseEstimator::new(square);
///
/// let tally = estimator.tally(1_000, &mut rng);
///
/// assert_eq!(tally.n(), 1_000);
/// assert!((tally.estimate().unwrap() - std::f64::consts::PI).abs() < 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct StepwiseEstimator {
    square: Square,
}

impl StepwiseEstimator {
    /// Create an estimator that samples the given square
    #[inline]
    pub fn new(square: Square) -> Self {
        StepwiseEstimator { square }
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
}

impl Default for StepwiseEstimator {
    fn default() -> Self {
        StepwiseEstimator::new(Square::unit())
    }
}

impl From<&StepwiseEstimator> for String {
    fn from(estimator: &StepwiseEstimator) -> String {
        format!("StepwiseEstimator({})", estimator.square)
    }
}

impl_display!(StepwiseEstimator);

impl PiEstimator for StepwiseEstimator {
    fn tally<R: Rng>(&self, n_samples: usize, rng: &mut R) -> HitTally {
        let circle = self.circle();
        let mut tally = HitTally::new();
        for _ in 0..n_samples {
            let pt = self.square.draw(rng);
            tally.observe(&circle.contains(&pt));
        }
        tally
    }

    fn trace<R: Rng>(&self, n_samples: usize, rng: &mut R) -> EstimateTrace {
        let circle = self.circle();
        let mut tally = HitTally::new();
        let mut estimates = Vec::with_capacity(n_samples);
        for _ in 0..n_samples {
            let pt = self.square.draw(rng);
            tally.observe(&circle.contains(&pt));
            if let Some(est) = tally.estimate() {
                estimates.push(est);
            }
        }
        EstimateTrace::new(estimates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;
    use std::f64::consts::PI;

    test_basic_impls!(StepwiseEstimator::default());

    #[test]
    fn tally_counts_every_sample() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x72D1);
        let tally = StepwiseEstimator::default().tally(1_000, &mut rng);
        assert_eq!(tally.n(), 1_000);
        assert_eq!(tally.hits() + tally.misses(), 1_000);
    }

    #[test]
    fn trace_len_equals_sample_count() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x72D2);
        let trace = StepwiseEstimator::default().trace(257, &mut rng);
        assert_eq!(trace.len(), 257);
    }

    #[test]
    fn zero_samples() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x72D3);
        let estimator = StepwiseEstimator::default();
        assert!(estimator.estimate(0, &mut rng).is_none());
        assert!(estimator.trace(0, &mut rng).is_empty());
        assert_eq!(estimator.tally(0, &mut rng), HitTally::new());
    }

    #[test]
    fn first_running_estimate_is_zero_or_four() {
        let mut rng = SmallRng::seed_from_u64(0x72D4);
        let trace = StepwiseEstimator::default().trace(1, &mut rng);
        let est = trace.final_estimate().unwrap();
        assert!(est == 0.0 || est == 4.0);
    }

    #[test]
    fn trace_ends_at_the_tally_estimate() {
        let estimator = StepwiseEstimator::default();
        let mut rng1 = Xoshiro256Plus::seed_from_u64(0x72D5);
        let mut rng2 = Xoshiro256Plus::seed_from_u64(0x72D5);

        let trace = estimator.trace(500, &mut rng1);
        let tally = estimator.tally(500, &mut rng2);

        assert_eq!(trace.final_estimate(), tally.estimate());
    }

    #[test]
    fn estimate_converges() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x72D6);
        let est = StepwiseEstimator::default()
            .estimate(100_000, &mut rng)
            .unwrap();
        assert!((est - PI).abs() < 0.05);
    }

    #[test]
    fn offset_square_estimates_the_same_pi() {
        // the π/4 area ratio does not care where the square sits
        let mut rng = Xoshiro256Plus::seed_from_u64(0x72D7);
        let square = Square::new(2.0, 2.0, 4.0).unwrap();
        let est = StepwiseEstimator::new(square)
            .estimate(100_000, &mut rng)
            .unwrap();
        assert!((est - PI).abs() < 0.05);
    }

    #[test]
    fn display() {
        let estimator = StepwiseEstimator::default();
        assert_eq!(
            estimator.to_string(),
            String::from("StepwiseEstimator(Square((0, 0), side 2))")
        );
    }
}
