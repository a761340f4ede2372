use crate::core::data::complex::Complex;
use crate::core::data::interval::Interval;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::region::Region;
use crate::core::transform::coordinate_transform::CoordinateTransform;
use crate::core::viewport::drag::DragState;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::zoom_selection::{SelectionBounds, ZoomSelection};
use tracing::debug;

/// Zoom-out grows each bound away from the selection edge by this multiple
/// of its current distance to that edge.
const ZOOM_OUT_EXPANSION: f64 = 2.0;

/// Owns the viewed region and every operation that changes it.
///
/// Each accepted change bumps `region_version` and raises the dirty flag;
/// consumers call [`take_dirty`](Self::take_dirty) to decide whether the
/// classification grid needs recomputing.
#[derive(Debug, Clone)]
pub struct ViewportController {
    region: Region,
    raster: RasterSize,
    zoom_selection: ZoomSelection,
    drag: Option<DragState>,
    region_version: u64,
    dirty: bool,
}

impl ViewportController {
    #[must_use]
    pub fn new(region: Region, raster: RasterSize, zoom_selection_fraction: f64) -> Self {
        Self {
            region,
            raster,
            zoom_selection: ZoomSelection::new(zoom_selection_fraction),
            drag: None,
            region_version: 0,
            dirty: true,
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

    /// Transform for the live region, rebuilt on every call.
    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        CoordinateTransform::new(self.region, self.raster)
    }

    #[must_use]
    pub fn zoom_selection(&self) -> ZoomSelection {
        self.zoom_selection
    }

    #[must_use]
    pub fn selection_rect(&self, pointer: Point) -> PixelRect {
        self.zoom_selection.rect_at(pointer, self.raster)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn region_version(&self) -> u64 {
        self.region_version
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Starting a drag while one is active rebases the anchor.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag = Some(DragState {
            anchor_region: self.region,
            anchor_pixel: pointer,
        });
    }

    /// Pans so the plane point under the anchor pixel follows the pointer.
    /// No-op when no drag is active.
    pub fn update_drag(&mut self, pointer: Point) -> Result<(), ViewportError> {
        let Some(drag) = self.drag else {
            return Ok(());
        };

        let transform = self.transform();
        let current = transform.pixel_to_coord(pointer);
        let anchor = transform.pixel_to_coord(drag.anchor_pixel);
        let displacement = Complex {
            real: -(current.real - anchor.real),
            imag: -(current.imag - anchor.imag),
        };

        let region = drag.anchor_region.translated(displacement)?;
        self.replace_region(region);

        Ok(())
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn adjust_zoom_selection_size(&mut self, delta: f64) {
        self.zoom_selection.adjust(delta);
    }

    /// Replaces the region with the selection rectangle around `pointer`.
    pub fn zoom_in(&mut self, pointer: Point) -> Result<(), ViewportError> {
        let rect = self.selection_rect(pointer);

        if rect.is_empty() {
            return Err(ViewportError::EmptySelection(rect));
        }

        let bounds = SelectionBounds::from_rect(rect, &self.transform());
        let region = Region::new(
            Interval::new(bounds.re_min, bounds.re_max),
            Interval::new(bounds.im_min, bounds.im_max),
        )?;

        debug!(?pointer, ?region, "zoom in");
        self.replace_region(region);

        Ok(())
    }

    /// Grows the region around the selection rectangle at `pointer`: each
    /// bound ends up twice its current distance beyond the matching
    /// selection edge.
    pub fn zoom_out(&mut self, pointer: Point) -> Result<(), ViewportError> {
        let rect = self.selection_rect(pointer);
        let pivot = SelectionBounds::from_rect(rect, &self.transform());
        let real = self.region.real();
        let imaginary = self.region.imaginary();

        let region = Region::new(
            Interval::new(
                pivot.re_min - ZOOM_OUT_EXPANSION * (real.min - pivot.re_min).abs(),
                pivot.re_max + ZOOM_OUT_EXPANSION * (real.max - pivot.re_max).abs(),
            ),
            Interval::new(
                pivot.im_min - ZOOM_OUT_EXPANSION * (imaginary.min - pivot.im_min).abs(),
                pivot.im_max + ZOOM_OUT_EXPANSION * (imaginary.max - pivot.im_max).abs(),
            ),
        )?;

        debug!(?pointer, ?region, "zoom out");
        self.replace_region(region);

        Ok(())
    }

    /// Jumps to `region`, abandoning any drag in progress.
    pub fn reset_view(&mut self, region: Region) {
        self.drag = None;
        self.replace_region(region);
    }

    fn replace_region(&mut self, region: Region) {
        if region == self.region {
            return;
        }

        self.region = region;
        self.region_version += 1;
        self.dirty = true;
    }
}
