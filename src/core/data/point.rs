/// A pixel position with a top-left origin. Pointer positions may lie
/// outside the raster, e.g. while dragging past the window edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
