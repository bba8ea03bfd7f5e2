//! Sampling geometry: points, squares, and their inscribed circles
mod circle;
mod point;
mod square;

pub use self::circle::InscribedCircle;
pub use self::point::Point;
pub use self::square::{Square, SquareError};
