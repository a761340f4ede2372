use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::core::data::raster_size::RasterSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        raster: RasterSize,
    ) -> Result<T, pixels::Error>;
}
