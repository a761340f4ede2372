use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationGridError {
    #[error("raster of {expected} pixels does not match {actual} classified cells")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Set-membership decision for every pixel of a raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationGrid {
    raster: RasterSize,
    cells: Vec<bool>,
}

impl ClassificationGrid {
    pub fn from_cells(
        raster: RasterSize,
        cells: Vec<bool>,
    ) -> Result<Self, ClassificationGridError> {
        if cells.len() != raster.pixel_count() {
            return Err(ClassificationGridError::SizeMismatch {
                expected: raster.pixel_count(),
                actual: cells.len(),
            });
        }

        Ok(Self { raster, cells })
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// `None` outside the raster.
    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<bool> {
        if pixel.x < 0
            || pixel.y < 0
            || pixel.x as u32 >= self.raster.width()
            || pixel.y as u32 >= self.raster.height()
        {
            return None;
        }

        let index = pixel.y as usize * self.raster.width() as usize + pixel.x as usize;
        Some(self.cells[index])
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.cells.iter().filter(|&&member| member).count()
    }
}
