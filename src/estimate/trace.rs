#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::f64::consts::PI;
use std::fmt;

/// The running π estimate after each observation.
///
/// The estimate at index k is computed from the first k + 1 points, so the
/// trace is as long as the sample and shows the estimate settling toward π as
/// points accumulate. An empty trace is the result of asking for zero
/// samples.
///
/// ```
/// use mcpi::EstimateTrace;
///
/// let trace = EstimateTrace::new(vec![4.0, 4.0, 2.6666666666666665]);
///
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.final_estimate(), Some(2.6666666666666665));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct EstimateTrace {
    estimates: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum TraceError {
    /// Tried to average over zero traces
    NoTraces,
    /// The traces to average had different lengths
    LengthMismatch { expected: usize, actual: usize },
}

impl EstimateTrace {
    /// Create a new trace from running estimates
    #[inline]
    pub fn new(estimates: Vec<f64>) -> Self {
        EstimateTrace { estimates }
    }

    /// The number of observations recorded
    #[inline]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// The running estimates as a slice
    #[inline]
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// The estimate using every observation, or `None` if the trace is empty
    #[inline]
    pub fn final_estimate(&self) -> Option<f64> {
        self.estimates.last().copied()
    }

    /// Iterate over the running estimates
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.estimates.iter()
    }

    /// Iterate over (observation count, running estimate) pairs. Counts start
    /// at 1.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::EstimateTrace;
    /// let trace = EstimateTrace::new(vec![4.0, 2.0]);
    /// let pairs: Vec<(usize, f64)> = trace.observations().collect();
    ///
    /// assert_eq!(pairs, vec![(1, 4.0), (2, 2.0)]);
    /// ```
    pub fn observations(
        &self,
    ) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.estimates
            .iter()
            .enumerate()
            .map(|(ix, &est)| (ix + 1, est))
    }

    /// Iterate over the absolute errors |estimate - π|
    pub fn abs_errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.estimates.iter().map(|&est| (est - PI).abs())
    }

    /// The absolute error of the final estimate, or `None` if the trace is
    /// empty
    #[inline]
    pub fn final_error(&self) -> Option<f64> {
        self.final_estimate().map(|est| (est - PI).abs())
    }

    /// Average traces pointwise.
    ///
    /// All traces must have the same length, and there must be at least one.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::EstimateTrace;
    /// let traces = vec![
    ///     EstimateTrace::new(vec![2.0, 4.0]),
    ///     EstimateTrace::new(vec![4.0, 4.0]),
    /// ];
    ///
    /// let mean = EstimateTrace::mean(&traces).unwrap();
    /// assert_eq!(mean.estimates(), &[3.0, 4.0]);
    /// ```
    pub fn mean(traces: &[EstimateTrace]) -> Result<EstimateTrace, TraceError> {
        let first = traces.first().ok_or(TraceError::NoTraces)?;
        let expected = first.len();
        let mut sums = vec![0.0; expected];

        for trace in traces {
            if trace.len() != expected {
                return Err(TraceError::LengthMismatch {
                    expected,
                    actual: trace.len(),
                });
            }
            sums.iter_mut()
                .zip(trace.estimates.iter())
                .for_each(|(sum, &est)| *sum += est);
        }

        let n_traces = traces.len() as f64;
        sums.iter_mut().for_each(|sum| *sum /= n_traces);
        Ok(EstimateTrace::new(sums))
    }
}

impl From<Vec<f64>> for EstimateTrace {
    fn from(estimates: Vec<f64>) -> Self {
        EstimateTrace::new(estimates)
    }
}

impl From<EstimateTrace> for Vec<f64> {
    fn from(trace: EstimateTrace) -> Self {
        trace.estimates
    }
}

impl std::error::Error for TraceError {}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTraces => write!(f, "no traces to average"),
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "trace length mismatch: expected {} but got {}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;

    const TOL: f64 = 1E-12;

    test_basic_impls!(EstimateTrace::new(vec![4.0, 2.0, 2.6666666666666665]));

    #[test]
    fn len_and_final_estimate() {
        let trace = EstimateTrace::new(vec![4.0, 2.0, 2.6666666666666665]);
        assert_eq!(trace.len(), 3);
        assert!(!trace.is_empty());
        assert::close(trace.final_estimate().unwrap(), 2.6666666666666665, TOL);
    }

    #[test]
    fn empty_trace() {
        let trace = EstimateTrace::new(vec![]);
        assert_eq!(trace.len(), 0);
        assert!(trace.is_empty());
        assert!(trace.final_estimate().is_none());
        assert!(trace.final_error().is_none());
        assert_eq!(trace.observations().count(), 0);
    }

    #[test]
    fn observations_are_one_based() {
        let trace = EstimateTrace::new(vec![4.0, 4.0, 2.6666666666666665]);
        let obs: Vec<usize> = trace.observations().map(|(k, _)| k).collect();
        assert_eq!(obs, vec![1, 2, 3]);
    }

    #[test]
    fn abs_errors() {
        let trace = EstimateTrace::new(vec![PI, PI + 0.5, PI - 0.25]);
        let errs: Vec<f64> = trace.abs_errors().collect();
        assert::close(errs[0], 0.0, TOL);
        assert::close(errs[1], 0.5, TOL);
        assert::close(errs[2], 0.25, TOL);
        assert::close(trace.final_error().unwrap(), 0.25, TOL);
    }

    #[test]
    fn mean_of_one_trace_is_the_trace() {
        let trace = EstimateTrace::new(vec![4.0, 2.0, 2.6666666666666665]);
        let mean = EstimateTrace::mean(std::slice::from_ref(&trace)).unwrap();
        assert_eq!(mean, trace);
    }

    #[test]
    fn mean_averages_pointwise() {
        let traces = vec![
            EstimateTrace::new(vec![2.0, 4.0, 3.0]),
            EstimateTrace::new(vec![4.0, 4.0, 3.5]),
        ];
        let mean = EstimateTrace::mean(&traces).unwrap();
        assert::close(mean.estimates()[0], 3.0, TOL);
        assert::close(mean.estimates()[1], 4.0, TOL);
        assert::close(mean.estimates()[2], 3.25, TOL);
    }

    #[test]
    fn mean_of_no_traces_errors() {
        let res = EstimateTrace::mean(&[]);
        assert_eq!(res, Err(TraceError::NoTraces));
    }

    #[test]
    fn mean_rejects_mismatched_lengths() {
        let traces = vec![
            EstimateTrace::new(vec![4.0, 4.0]),
            EstimateTrace::new(vec![4.0]),
        ];
        let res = EstimateTrace::mean(&traces);
        assert_eq!(
            res,
            Err(TraceError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn vec_round_trip() {
        let xs = vec![4.0, 2.0];
        let trace = EstimateTrace::from(xs.clone());
        let back: Vec<f64> = trace.into();
        assert_eq!(back, xs);
    }
}
