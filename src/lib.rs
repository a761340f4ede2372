pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::cli::args::ViewerArgs;
pub use controllers::cli::classify::{PointClassification, classify_point};
pub use controllers::cli::render::{RenderCommand, RenderCommandError, RenderSummary};
pub use controllers::interactive::InteractiveController;
pub use controllers::viewer::config::{ConfigError, ViewerConfig};
pub use controllers::viewer::events::{PointerButton, ViewerEvent, ViewerKey};
pub use controllers::viewer::frame_loop::{FrameError, FrameOutcome, run_frame, run_until_quit};
pub use controllers::viewer::ports::{DisplayError, DisplaySurface, InputSource};
pub use controllers::viewer::session::ViewerSession;
pub use core::data::complex::Complex;
pub use core::data::region::Region;
pub use core::fractals::mandelbrot::evaluator::{EscapeTimeEvaluator, GridStrategy};
pub use core::fractals::mandelbrot::mandelbrot_config::DEFAULT_MAX_ITERATIONS;
pub use core::viewport::controller::ViewportController;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::frame_compositor::FrameCompositor;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
