use crate::core::data::complex::Complex;
use crate::core::data::interval::Interval;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("{axis} interval must be finite with min < max: [{min}, {max}]")]
    Degenerate { axis: Axis, min: f64, max: f64 },
}

/// The rectangle of the complex plane currently in view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    real: Interval,
    imaginary: Interval,
}

impl Region {
    pub fn new(real: Interval, imaginary: Interval) -> Result<Self, RegionError> {
        for (axis, interval) in [(Axis::Real, real), (Axis::Imaginary, imaginary)] {
            if !interval.is_valid() {
                return Err(RegionError::Degenerate {
                    axis,
                    min: interval.min,
                    max: interval.max,
                });
            }
        }

        Ok(Self { real, imaginary })
    }

    #[must_use]
    pub fn real(&self) -> Interval {
        self.real
    }

    #[must_use]
    pub fn imaginary(&self) -> Interval {
        self.imaginary
    }

    /// Shifts the whole region. A translation keeps both spans, so the
    /// result is valid whenever `self` is and the offsets are finite.
    pub fn translated(&self, offset: Complex) -> Result<Self, RegionError> {
        Self::new(
            self.real.translated(offset.real),
            self.imaginary.translated(offset.imag),
        )
    }
}
