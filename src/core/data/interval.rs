/// A closed range `[min, max]` on one axis of the complex plane.
///
/// The type does not enforce `min < max`; [`Region::new`] does, and every
/// viewport mutation goes through it.
///
/// [`Region::new`]: crate::core::data::region::Region::new
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Replaces out-of-range values with the nearest bound.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    #[must_use]
    pub fn translated(&self, offset: f64) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}
