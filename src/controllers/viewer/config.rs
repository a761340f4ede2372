use std::time::Duration;

use thiserror::Error;

use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::data::region::RegionError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 512;
pub const DEFAULT_ZOOM_SELECTION_FRACTION: f64 = 0.8;
pub const DEFAULT_ZOOM_STEP: f64 = 0.005;
pub const DEFAULT_ZOOM_REPEAT_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Raster(#[from] RasterSizeError),
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error("zoom selection fraction must lie in [0, 1], got {0}")]
    ZoomFraction(f64),
    #[error("zoom step must be positive and finite, got {0}")]
    ZoomStep(f64),
    #[error("iteration budget must be greater than zero")]
    ZeroIterations,
}

/// Start-up settings for one viewer session. Fixed once the session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub raster: RasterSize,
    pub mandelbrot: MandelbrotConfig,
    pub zoom_selection_fraction: f64,
    pub zoom_step: f64,
    pub zoom_repeat_interval: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let raster = match RasterSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) {
            Ok(raster) => raster,
            Err(err) => unreachable!("default raster is valid: {err}"),
        };

        Self {
            raster,
            mandelbrot: MandelbrotConfig::default(),
            zoom_selection_fraction: DEFAULT_ZOOM_SELECTION_FRACTION,
            zoom_step: DEFAULT_ZOOM_STEP,
            zoom_repeat_interval: DEFAULT_ZOOM_REPEAT_INTERVAL,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.zoom_selection_fraction) {
            return Err(ConfigError::ZoomFraction(self.zoom_selection_fraction));
        }

        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }

        if self.mandelbrot.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        Ok(())
    }
}
