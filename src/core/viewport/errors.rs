use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::region::RegionError;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom selection {}x{} is empty", .0.width(), .0.height())]
    EmptySelection(PixelRect),
    #[error("rejected region: {0}")]
    InvalidRegion(#[from] RegionError),
}
