//! Random utilities
mod accel;
mod func;
mod x2;

pub use accel::*;
pub use func::*;
pub use x2::x2_test;
