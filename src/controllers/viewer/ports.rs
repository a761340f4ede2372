use thiserror::Error;

use crate::controllers::viewer::events::ViewerEvent;
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("grid of {grid_width}x{grid_height} does not fit a {width}x{height} surface")]
    SizeMismatch {
        grid_width: u32,
        grid_height: u32,
        width: u32,
        height: u32,
    },
    #[error("display surface failed: {0}")]
    Surface(String),
}

pub trait InputSource {
    /// Drains every event queued since the previous call.
    fn poll_events(&mut self) -> Vec<ViewerEvent>;

    fn pointer_position(&self) -> Point;
}

/// Accepts grids and outlines and shows the most recent submission on
/// `present`. Outlines last for one presented frame.
pub trait DisplaySurface {
    fn submit_grid(&mut self, grid: &ClassificationGrid) -> Result<(), DisplayError>;

    fn draw_rect_outline(&mut self, rect: PixelRect);

    fn present(&mut self) -> Result<(), DisplayError>;
}
