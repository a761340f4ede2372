use crate::core::data::interval::Interval;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::evaluator::EscapeTimeEvaluator;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_REAL_INTERVAL: Interval = Interval::new(-2.0, 1.0);
pub const DEFAULT_IMAGINARY_INTERVAL: Interval = Interval::new(-1.0, 1.0);

#[must_use]
pub fn default_region() -> Region {
    match Region::new(DEFAULT_REAL_INTERVAL, DEFAULT_IMAGINARY_INTERVAL) {
        Ok(region) => region,
        Err(err) => unreachable!("default region is valid: {err}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: Region,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_evaluator(&self) -> Result<EscapeTimeEvaluator, MandelbrotError> {
        EscapeTimeEvaluator::new(self.max_iterations)
    }
}
