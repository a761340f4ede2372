pub mod classification_grid;
pub mod colour;
pub mod complex;
pub mod interval;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod raster_size;
pub mod region;
