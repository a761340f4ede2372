use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, warn};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::viewer::ports::DisplaySurface;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::frame_compositor::FrameCompositor;
use crate::presenters::pixels::adapter::PixelsAdapter;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    compositor: FrameCompositor,
    last_presented_generation: u64,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        raster: RasterSize,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            compositor: FrameCompositor::new(raster),
            last_presented_generation: 0,
        })
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn window_to_raster(&self, x: f64, y: f64) -> Point {
        let (px, py) = match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
            Ok((px, py)) => (px as i64, py as i64),
            Err((px, py)) => (px as i64, py as i64),
        };

        Point {
            x: px.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            y: py.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }

    fn render(&mut self, selection: PixelRect) -> Result<(), pixels::Error> {
        self.maybe_take_frame();

        self.compositor.draw_rect_outline(selection);
        if let Err(err) = self.compositor.compose_into(self.pixels.frame_mut()) {
            warn!(%err, "frame composition failed");
        }

        self.pixels.render()
    }
}

impl PixelsPresenter {
    fn maybe_take_frame(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation {
                    return;
                }

                if let Err(err) = self.compositor.submit_grid(&frame.grid) {
                    warn!(%err, generation = frame.generation, "dropping frame");
                    return;
                }

                debug!(
                    generation = frame.generation,
                    region_version = frame.region_version,
                    render_ms = frame.render_duration.as_millis(),
                    "frame presented"
                );

                self.last_presented_generation = frame.generation;
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    warn!(generation = error.generation, message = %error.message, "render error");
                }
            }
        }
    }
}
