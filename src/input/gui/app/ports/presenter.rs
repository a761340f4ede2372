use std::sync::Arc;

use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        raster: RasterSize,
    ) -> Result<Self, pixels::Error>;

    /// Draws the newest grid with the selection outline on top.
    fn render(&mut self, selection: PixelRect) -> Result<(), pixels::Error>;

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Maps a physical window position to a raster pixel. Positions outside
    /// the raster map outside it as well.
    fn window_to_raster(&self, x: f64, y: f64) -> Point;
}
