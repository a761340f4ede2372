use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RasterSizeError {
    #[error("raster size must be positive: {width}x{height}")]
    Empty { width: u32, height: u32 },
}

/// Pixel dimensions of the viewer surface, fixed for the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterSize {
    width: u32,
    height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterSizeError> {
        if width == 0 || height == 0 {
            return Err(RasterSizeError::Empty { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let raster = RasterSize::new(1024, 512).unwrap();

        assert_eq!(raster.width(), 1024);
        assert_eq!(raster.height(), 512);
        assert_eq!(raster.pixel_count(), 524_288);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            RasterSize::new(0, 10),
            Err(RasterSizeError::Empty {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            RasterSize::new(10, 0),
            Err(RasterSizeError::Empty {
                width: 10,
                height: 0
            })
        );
    }
}
