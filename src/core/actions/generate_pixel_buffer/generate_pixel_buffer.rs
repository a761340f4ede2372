use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::raster_size::RasterSize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E: std::error::Error + 'static> {
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps row-major values to RGB bytes for a raster.
pub fn generate_pixel_buffer<I, CMap>(
    input: I,
    mapper: &CMap,
    raster: RasterSize,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    I: IntoIterator<Item = CMap::T>,
    CMap: ColourMap,
    CMap::Failure: 'static,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(raster.pixel_count() * 3);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(raster, buffer)?)
}
