use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::transform::coordinate_transform::CoordinateTransform;
use std::convert::Infallible;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iteration (1-based) at which the orbit of `z = 0` under `z*z + c` first
/// leaves the radius-2 disc, or `None` if it stays inside for `budget`
/// iterations. The bound is strict, so `|z| == 2` does not escape.
#[must_use]
pub fn escape_iteration(c: Complex, budget: u32) -> Option<u32> {
    let mut z = Complex::ZERO;

    for iteration in 1..=budget {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return Some(iteration);
        }
    }

    None
}

#[must_use]
pub fn classify(c: Complex, budget: u32) -> bool {
    escape_iteration(c, budget).is_none()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    transform: CoordinateTransform,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(transform: CoordinateTransform, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            transform,
            max_iterations,
        })
    }

    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.transform
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = bool;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(classify(
            self.transform.pixel_to_coord(pixel),
            self.max_iterations,
        ))
    }
}
