use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::escape_iteration;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointClassification {
    pub point: Complex,
    pub max_iterations: u32,
    pub escape_iteration: Option<u32>,
}

impl PointClassification {
    #[must_use]
    pub fn is_member(&self) -> bool {
        self.escape_iteration.is_none()
    }
}

impl fmt::Display for PointClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex { real, imag } = self.point;

        match self.escape_iteration {
            None => write!(
                f,
                "{real} {imag:+}i is a member (bounded for {} iterations)",
                self.max_iterations
            ),
            Some(iteration) => write!(
                f,
                "{real} {imag:+}i is not a member (escaped at iteration {iteration})"
            ),
        }
    }
}

pub fn classify_point(point: Complex, max_iterations: u32) -> Result<PointClassification, MandelbrotError> {
    if max_iterations == 0 {
        return Err(MandelbrotError::ZeroMaxIterations);
    }

    Ok(PointClassification {
        point,
        max_iterations,
        escape_iteration: escape_iteration(point, max_iterations),
    })
}
