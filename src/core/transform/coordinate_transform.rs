use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::region::Region;
use crate::core::transform::axis_mapping::AxisMapping;

/// Pixel <-> plane mapping for one `(Region, RasterSize)` pair.
///
/// A plain value: rebuild it whenever the region changes rather than
/// mutating it. The real axis runs left to right, the imaginary axis
/// bottom to top.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateTransform {
    region: Region,
    raster: RasterSize,
    x: AxisMapping,
    y: AxisMapping,
}

impl CoordinateTransform {
    #[must_use]
    pub fn new(region: Region, raster: RasterSize) -> Self {
        Self {
            region,
            raster,
            x: AxisMapping::new(region.real(), raster.width(), false),
            y: AxisMapping::new(region.imaginary(), raster.height(), true),
        }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn x(&self) -> AxisMapping {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> AxisMapping {
        self.y
    }

    #[must_use]
    pub fn pixel_to_coord(&self, pixel: Point) -> Complex {
        Complex {
            real: self.x.to_coord(f64::from(pixel.x)),
            imag: self.y.to_coord(f64::from(pixel.y)),
        }
    }

    #[must_use]
    pub fn coord_to_pixel(&self, coord: Complex) -> Point {
        Point {
            x: self.x.to_pixel(coord.real),
            y: self.y.to_pixel(coord.imag),
        }
    }
}
