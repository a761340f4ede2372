use crate::core::data::interval::Interval;

/// Linear mapping between one plane axis and one raster axis.
///
/// `inverted` flips the pixel direction so that larger plane values land
/// nearer pixel 0; the imaginary axis uses it against a top-left origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisMapping {
    interval: Interval,
    extent: f64,
    inverted: bool,
}

impl AxisMapping {
    #[must_use]
    pub fn new(interval: Interval, extent: u32, inverted: bool) -> Self {
        Self {
            interval,
            extent: f64::from(extent),
            inverted,
        }
    }

    /// Plane value to pixel. Values outside the interval are clamped to the
    /// nearest bound first, so the result always lies in `[0, extent]`.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> i32 {
        let value = self.interval.clamp(value);
        let scaled = ((value - self.interval.min) / self.interval.span() * self.extent) as i32;

        if self.inverted {
            self.extent as i32 - scaled
        } else {
            scaled
        }
    }

    /// Pixel to plane value. Not clamped: pixels past the raster edge
    /// extrapolate past the interval.
    #[must_use]
    pub fn to_coord(&self, pixel: f64) -> f64 {
        let offset = if self.inverted {
            self.extent - pixel
        } else {
            pixel
        };

        offset / self.extent * self.interval.span() + self.interval.min
    }

    /// Plane distance covered by one pixel.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.interval.span() / self.extent
    }
}
