use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation a grid generator drives. Implementations own
/// whatever parameters they need; `compute` must be pure so pixels can run
/// in any order or in parallel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
