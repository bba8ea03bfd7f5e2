//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::estimate::{
    mean_trace, BatchEstimator, EstimateTrace, StepwiseEstimator, TraceError,
};
#[doc(no_inline)]
pub use crate::geom::{InscribedCircle, Point, Square, SquareError};
#[doc(no_inline)]
pub use crate::tally::HitTally;
#[doc(no_inline)]
pub use crate::traits::*;
