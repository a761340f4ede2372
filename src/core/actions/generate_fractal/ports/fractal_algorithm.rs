use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation. Implementations must be pure functions of the
/// pixel so that any evaluation order yields the same grid.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
