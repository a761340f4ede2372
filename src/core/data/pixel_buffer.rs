use crate::core::data::raster_size::RasterSize;
use thiserror::Error;

fn raster_to_buffer_size(raster: RasterSize) -> usize {
    raster.pixel_count() * 3
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("raster size {raster_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes covering a whole raster.
#[derive(Debug)]
pub struct PixelBuffer {
    raster: RasterSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(raster: RasterSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let raster_size = raster_to_buffer_size(raster);

        if raster_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { raster, buffer })
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_raster(width: u32, height: u32) -> RasterSize {
        RasterSize::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let raster = create_raster(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(raster, data.clone()).unwrap();

        assert_eq!(buffer.raster(), raster);
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(create_raster(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                raster_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(create_raster(2, 2), vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                raster_size: 12,
                buffer_size: 24
            }
        );
    }
}
