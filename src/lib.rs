//! # mcpi
//!
//! Estimate π with Monte Carlo rejection sampling: draw points uniformly
//! from a square and count how many land in the inscribed circle. The areas
//! relate the hit rate to π,
//!
//! ```text
//!  A_circle      pi * r^2    pi         # in circle
//! ----------  =  -------- = ----  => 4 ------------- ~= pi
//!  A_square      4 * r^2      4         # in square
//! ```
//!
//! so four times the observed hit rate estimates π. Two estimators organize
//! the computation differently, one point at a time versus bulk arrays, and
//! produce bit-identical results for identically seeded generators.
//!
//! # Quick start
//!
//! ```
//! use mcpi::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//! use std::f64::consts::PI;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(42);
//!
//! let estimator = StepwiseEstimator::default();
//! let est = estimator.estimate(100_000, &mut rng).unwrap();
//!
//! assert!((est - PI).abs() < 0.05);
//! ```
//!
//! # Design
//!
//! - Geometry is validated at construction. A [`Square`](geom::Square) with
//!   a non-finite center or a non-positive side is an error, and the
//!   [`InscribedCircle`](geom::InscribedCircle) can only be derived from a
//!   square, so it is always valid.
//! - Quantities that are undefined at zero samples (the estimate, the hit
//!   rate, the standard error) are `Option`s, never `NaN`.
//! - Sampling goes through [`Sampleable`](traits::Sampleable) with any
//!   `rand::Rng`, so seeded runs reproduce exactly.
//!
//! # Feature flags
//!
//! - `serde1`: serialization for geometry, tally, trace, and estimator types
//! - `plot`: SVG figures of convergence and classified samples via
//!   `plotters`
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]

use doc_comment::doc_comment;

doc_comment!(include_str!("../README.md"));

pub mod consts;
pub mod estimate;
pub mod geom;
pub mod misc;
#[cfg(feature = "plot")]
pub mod plot;
pub mod prelude;
pub mod tally;
pub mod traits;

pub use estimate::{EstimateTrace, TraceError};
pub use tally::HitTally;

/// Implement [`Display`](std::fmt::Display) for types that implement
/// `From<&Self> for String`
#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
