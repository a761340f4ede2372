use crate::core::data::point::Point;

/// An axis-aligned rectangle in pixel space, anchored at its top-left
/// corner. It may extend past the raster and may be empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

impl PixelRect {
    #[must_use]
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose centre is `centre`, halving with
    /// integer division the way the selection overlay is laid out.
    #[must_use]
    pub fn centred_on(centre: Point, width: u32, height: u32) -> Self {
        Self {
            left: centre.x - (width / 2) as i32,
            top: centre.y - (height / 2) as i32,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.top
    }

    #[must_use]
    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
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
    pub fn top_left(&self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.right(),
            y: self.bottom(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
