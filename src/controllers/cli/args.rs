use clap::Args;

use crate::controllers::viewer::config::{
    ConfigError, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_ZOOM_SELECTION_FRACTION, ViewerConfig,
};
use crate::core::data::interval::Interval;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_IMAGINARY_INTERVAL, DEFAULT_MAX_ITERATIONS, DEFAULT_REAL_INTERVAL, MandelbrotConfig,
};

/// View settings shared by the CLI and the GUI binaries.
#[derive(Debug, Clone, Args)]
pub struct ViewerArgs {
    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Escape-time iteration budget
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Zoom selection size as a fraction of the raster
    #[arg(long, default_value_t = DEFAULT_ZOOM_SELECTION_FRACTION)]
    pub zoom_fraction: f64,

    /// Lower bound of the real axis
    #[arg(long, default_value_t = DEFAULT_REAL_INTERVAL.min, allow_negative_numbers = true)]
    pub re_min: f64,

    /// Upper bound of the real axis
    #[arg(long, default_value_t = DEFAULT_REAL_INTERVAL.max, allow_negative_numbers = true)]
    pub re_max: f64,

    /// Lower bound of the imaginary axis
    #[arg(long, default_value_t = DEFAULT_IMAGINARY_INTERVAL.min, allow_negative_numbers = true)]
    pub im_min: f64,

    /// Upper bound of the imaginary axis
    #[arg(long, default_value_t = DEFAULT_IMAGINARY_INTERVAL.max, allow_negative_numbers = true)]
    pub im_max: f64,
}

impl ViewerArgs {
    pub fn to_config(&self) -> Result<ViewerConfig, ConfigError> {
        let config = ViewerConfig {
            raster: RasterSize::new(self.width, self.height)?,
            mandelbrot: MandelbrotConfig {
                region: Region::new(
                    Interval::new(self.re_min, self.re_max),
                    Interval::new(self.im_min, self.im_max),
                )?,
                max_iterations: self.iterations,
            },
            zoom_selection_fraction: self.zoom_fraction,
            ..ViewerConfig::default()
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster_size::RasterSizeError;
    use crate::core::data::region::RegionError;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        viewer: ViewerArgs,
    }

    fn parse(args: &[&str]) -> ViewerArgs {
        let argv = std::iter::once("test").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().viewer
    }

    #[test]
    fn defaults_produce_default_config() {
        let config = parse(&[]).to_config().unwrap();

        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn negative_bounds_are_accepted() {
        let config = parse(&[
            "--re-min", "-0.8", "--re-max", "-0.7", "--im-min", "-0.1", "--im-max", "0.1",
        ])
        .to_config()
        .unwrap();

        assert_eq!(config.mandelbrot.region.real(), Interval::new(-0.8, -0.7));
        assert_eq!(config.mandelbrot.region.imaginary(), Interval::new(-0.1, 0.1));
    }

    #[test]
    fn size_and_budget_are_applied() {
        let config = parse(&["--width", "320", "--height", "200", "--iterations", "100"])
            .to_config()
            .unwrap();

        assert_eq!(config.raster, RasterSize::new(320, 200).unwrap());
        assert_eq!(config.mandelbrot.max_iterations, 100);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            parse(&["--width", "0"]).to_config(),
            Err(ConfigError::Raster(RasterSizeError::Empty {
                width: 0,
                height: 512
            }))
        );
    }

    #[test]
    fn inverted_interval_is_rejected() {
        assert!(matches!(
            parse(&["--re-min", "1", "--re-max", "-1"]).to_config(),
            Err(ConfigError::Region(RegionError::Degenerate { .. }))
        ));
    }

    #[test]
    fn zero_iterations_are_rejected() {
        assert_eq!(
            parse(&["--iterations", "0"]).to_config(),
            Err(ConfigError::ZeroIterations)
        );
    }
}
