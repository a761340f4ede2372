use std::convert::Infallible;
use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewer::config::ViewerConfig;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::MembershipColours;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::errors::{EvaluateGridError, MandelbrotError};
use crate::core::transform::coordinate_transform::CoordinateTransform;

#[derive(Debug, Error)]
pub enum RenderCommandError {
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateGridError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError<Infallible>),
    #[error("nothing rendered yet")]
    NotRendered,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub pixels: usize,
    pub members: usize,
    pub duration: Duration,
}

/// Renders the configured view once and hands the image to a file
/// presenter.
pub struct RenderCommand<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderCommand<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &ViewerConfig) -> Result<RenderSummary, RenderCommandError> {
        let raster = config.raster;
        let mut evaluator = config.mandelbrot.build_evaluator()?;

        info!(
            width = raster.width(),
            height = raster.height(),
            max_iterations = config.mandelbrot.max_iterations,
            "rendering mandelbrot set"
        );

        let start = Instant::now();
        let grid = evaluator.compute_grid(CoordinateTransform::new(config.mandelbrot.region, raster))?;
        let duration = start.elapsed();

        info!(?duration, members = grid.member_count(), "grid computed");

        self.buffer = Some(generate_pixel_buffer(
            grid.cells().iter().copied(),
            &MembershipColours::default(),
            raster,
        )?);

        Ok(RenderSummary {
            pixels: raster.pixel_count(),
            members: grid.member_count(),
            duration,
        })
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderCommandError> {
        let buffer = self.buffer.as_ref().ok_or(RenderCommandError::NotRendered)?;
        self.presenter.present(buffer, filepath.as_ref())?;

        info!(path = %filepath.as_ref().display(), "image written");
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster_size::RasterSize;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer().clone()));
            Ok(())
        }
    }

    struct FailingPresenter;

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _: &PixelBuffer, _: impl AsRef<Path>) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            raster: RasterSize::new(30, 20).unwrap(),
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn generate_then_write_hands_buffer_to_presenter() {
        let mut command = RenderCommand::new(RecordingPresenter::default());

        let summary = command.generate(&small_config()).unwrap();
        command.write("out.ppm").unwrap();

        assert_eq!(summary.pixels, 600);
        assert!(summary.members > 0 && summary.members < 600);

        let written = command.presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out.ppm"));
        assert_eq!(written[0].1.len(), 600 * 3);
        // members are black, everything else white
        let black = written[0].1.chunks_exact(3).filter(|px| *px == [0u8, 0, 0]).count();
        assert_eq!(black, summary.members);
    }

    #[test]
    fn write_before_generate_fails() {
        let command = RenderCommand::new(RecordingPresenter::default());

        assert!(matches!(
            command.write("out.ppm"),
            Err(RenderCommandError::NotRendered)
        ));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let mut command = RenderCommand::new(RecordingPresenter::default());
        let mut config = small_config();
        config.mandelbrot.max_iterations = 0;

        assert!(matches!(
            command.generate(&config),
            Err(RenderCommandError::Mandelbrot(MandelbrotError::ZeroMaxIterations))
        ));
    }

    #[test]
    fn presenter_io_error_is_propagated() {
        let mut command = RenderCommand::new(FailingPresenter);
        command.generate(&small_config()).unwrap();

        assert!(matches!(
            command.write("out.ppm"),
            Err(RenderCommandError::Io(_))
        ));
    }
}
