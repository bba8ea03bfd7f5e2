//! Monte Carlo estimators of π and their convergence traces.
//!
//! The two estimators organize the same computation differently and are
//! interchangeable. Seed them identically and they agree to the bit:
//!
//! ```
//! use mcpi::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng1 = Xoshiro256Plus::seed_from_u64(0x1234);
//! let mut rng2 = Xoshiro256Plus::seed_from_u64(0x1234);
//!
//! let stepwise = StepwiseEstimator::default().trace(500, &mut rng1);
//! let batch = BatchEstimator::default().trace(500, &mut rng2);
//!
//! assert_eq!(stepwise, batch);
//! ```
mod batch;
mod stepwise;
mod trace;

pub use self::batch::BatchEstimator;
pub use self::stepwise::StepwiseEstimator;
pub use self::trace::{EstimateTrace, TraceError};

use crate::traits::PiEstimator;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Average the convergence traces of several independent runs.
///
/// Each run gets its own `Xoshiro256Plus` generator seeded from the master
/// generator, so seeding the master reproduces the whole experiment. The
/// averaged trace settles toward π faster than any single run.
///
/// # Example
///
/// ```
/// use mcpi::estimate::{mean_trace, StepwiseEstimator};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
/// let estimator = StepwiseEstimator::default();
///
/// let trace = mean_trace(&estimator, 1_000, 10, &mut rng).unwrap();
/// assert_eq!(trace.len(), 1_000);
/// ```
pub fn mean_trace<E, R>(
    estimator: &E,
    n_samples: usize,
    n_runs: usize,
    rng: &mut R,
) -> Result<EstimateTrace, TraceError>
where
    E: PiEstimator,
    R: Rng,
{
    let traces: Vec<EstimateTrace> = (0..n_runs)
        .map(|_| {
            let mut child = Xoshiro256Plus::seed_from_u64(rng.gen());
            estimator.trace(n_samples, &mut child)
        })
        .collect();
    EstimateTrace::mean(&traces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_trace_has_sample_len() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x3E1);
        let trace =
            mean_trace(&StepwiseEstimator::default(), 200, 5, &mut rng)
                .unwrap();
        assert_eq!(trace.len(), 200);
    }

    #[test]
    fn mean_trace_no_runs_errors() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x3E2);
        let res = mean_trace(&StepwiseEstimator::default(), 200, 0, &mut rng);
        assert_eq!(res, Err(TraceError::NoTraces));
    }

    #[test]
    fn mean_trace_zero_samples_is_empty() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x3E3);
        let trace =
            mean_trace(&StepwiseEstimator::default(), 0, 3, &mut rng).unwrap();
        assert!(trace.is_empty());
    }

    #[test]
    fn mean_trace_reproduces_from_master_seed() {
        let estimator = BatchEstimator::default();
        let mut rng1 = Xoshiro256Plus::seed_from_u64(0x3E4);
        let mut rng2 = Xoshiro256Plus::seed_from_u64(0x3E4);

        let trace1 = mean_trace(&estimator, 300, 4, &mut rng1).unwrap();
        let trace2 = mean_trace(&estimator, 300, 4, &mut rng2).unwrap();

        assert_eq!(trace1, trace2);
    }

    #[test]
    fn mean_trace_is_estimator_agnostic() {
        let mut rng1 = Xoshiro256Plus::seed_from_u64(0x3E5);
        let mut rng2 = Xoshiro256Plus::seed_from_u64(0x3E5);

        let stepwise =
            mean_trace(&StepwiseEstimator::default(), 300, 4, &mut rng1)
                .unwrap();
        let batch = mean_trace(&BatchEstimator::default(), 300, 4, &mut rng2)
            .unwrap();

        assert_eq!(stepwise, batch);
    }
}
