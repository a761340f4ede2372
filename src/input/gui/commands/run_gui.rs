use std::marker::PhantomData;

use anyhow::{Context, Result};
use tracing::info;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::viewer::config::ViewerConfig;
use crate::controllers::viewer::session::ViewerSession;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until the viewer quits.
    pub fn execute(&self) -> Result<()> {
        let raster = self.config.raster;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .context("failed to create event loop")?;

        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a 'static window; it lives for the whole process
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Viewer")
                .with_inner_size(PhysicalSize::new(raster.width(), raster.height()))
                .with_resizable(false)
                .build(&event_loop)
                .context("failed to create window")?,
        ));

        let presenter = self
            .presenter_factory
            .build(window, event_loop_proxy, raster)
            .context("failed to create pixels surface")?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let session = ViewerSession::new(&self.config);

        info!(
            width = raster.width(),
            height = raster.height(),
            max_iterations = self.config.mandelbrot.max_iterations,
            "viewer started"
        );

        GuiApp::new(window, session, presenter, controller)
            .run(event_loop)
            .context("event loop failed")
    }
}
