use crate::core::data::point::Point;
use crate::core::data::region::Region;

/// Region and pointer position captured when a drag starts. Every update
/// offsets this snapshot once instead of nudging the live region, so
/// repeated small float steps cannot accumulate drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragState {
    pub anchor_region: Region,
    pub anchor_pixel: Point,
}
