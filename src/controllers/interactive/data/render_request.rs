use crate::core::data::region::Region;
use crate::core::transform::coordinate_transform::CoordinateTransform;

/// Snapshot of everything one grid evaluation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub region_version: u64,
    pub transform: CoordinateTransform,
    pub max_iterations: u32,
}

impl RenderRequest {
    #[must_use]
    pub fn region(&self) -> Region {
        self.transform.region()
    }
}
