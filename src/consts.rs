//! Mathematical constants

/// π/4, the probability that a uniform draw from a square lands in the
/// inscribed circle
pub const QUARTER_PI: f64 = 0.785_398_163_397_448_3;
/// (π/4)(1 - π/4), the variance of the in-circle indicator
pub const HIT_VARIANCE: f64 = 0.168_547_888_329_363_4;
