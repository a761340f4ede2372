use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::transform::coordinate_transform::CoordinateTransform;

/// Size of the pointer-centred zoom rectangle as a fraction of the raster.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomSelection {
    size_fraction: f64,
}

impl ZoomSelection {
    #[must_use]
    pub fn new(size_fraction: f64) -> Self {
        Self {
            size_fraction: size_fraction.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn size_fraction(&self) -> f64 {
        self.size_fraction
    }

    pub fn adjust(&mut self, delta: f64) {
        self.size_fraction = (self.size_fraction + delta).clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn rect_at(&self, pointer: Point, raster: RasterSize) -> PixelRect {
        let width = (self.size_fraction * f64::from(raster.width())) as u32;
        let height = (self.size_fraction * f64::from(raster.height())) as u32;

        PixelRect::centred_on(pointer, width, height)
    }
}

/// Plane coordinates of a selection rectangle's edges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionBounds {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl SelectionBounds {
    /// Left/right edges give the real bounds; the bottom edge gives the
    /// imaginary minimum and the top edge the maximum.
    #[must_use]
    pub fn from_rect(rect: PixelRect, transform: &CoordinateTransform) -> Self {
        Self {
            re_min: transform.x().to_coord(f64::from(rect.left())),
            re_max: transform.x().to_coord(f64::from(rect.right())),
            im_min: transform.y().to_coord(f64::from(rect.bottom())),
            im_max: transform.y().to_coord(f64::from(rect.top())),
        }
    }
}
