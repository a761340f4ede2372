use std::sync::Arc;
use std::time::Duration;

use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::region::Region;

/// A finished grid, tagged with the request generation and the region
/// version it was computed for.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub region_version: u64,
    pub region: Region,
    pub grid: Arc<ClassificationGrid>,
    pub render_duration: Duration,
}
