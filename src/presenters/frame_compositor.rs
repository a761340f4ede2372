use crate::adapters::pixel_format::{copy_rgb_to_rgba, draw_rect_outline};
use crate::controllers::viewer::ports::{DisplayError, DisplaySurface};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::MembershipColours;
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::raster_size::RasterSize;

pub const OUTLINE_THICKNESS: u32 = 2;

/// Keeps the latest grid as RGBA and layers the pending outlines over it
/// when a frame is presented.
#[derive(Debug)]
pub struct FrameCompositor {
    raster: RasterSize,
    colours: MembershipColours,
    outline_colour: Colour,
    base: Vec<u8>,
    frame: Vec<u8>,
    outlines: Vec<PixelRect>,
}

impl FrameCompositor {
    #[must_use]
    pub fn new(raster: RasterSize) -> Self {
        let colours = MembershipColours::default();
        let rgba_len = raster.pixel_count() * 4;

        Self {
            raster,
            colours,
            outline_colour: colours.member,
            base: vec![0; rgba_len],
            frame: vec![0; rgba_len],
            outlines: Vec::new(),
        }
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    /// The most recently presented RGBA frame.
    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Writes the base grid plus outlines into `dst` and clears the
    /// outlines.
    pub fn compose_into(&mut self, dst: &mut [u8]) -> Result<(), DisplayError> {
        if dst.len() != self.base.len() {
            return Err(DisplayError::Surface(format!(
                "frame of {} bytes does not fit a {}x{} raster",
                dst.len(),
                self.raster.width(),
                self.raster.height()
            )));
        }

        dst.copy_from_slice(&self.base);
        for rect in self.outlines.drain(..) {
            draw_rect_outline(dst, self.raster, rect, OUTLINE_THICKNESS, self.outline_colour);
        }

        Ok(())
    }
}

impl DisplaySurface for FrameCompositor {
    fn submit_grid(&mut self, grid: &ClassificationGrid) -> Result<(), DisplayError> {
        if grid.raster() != self.raster {
            return Err(DisplayError::SizeMismatch {
                grid_width: grid.raster().width(),
                grid_height: grid.raster().height(),
                width: self.raster.width(),
                height: self.raster.height(),
            });
        }

        let rgb = generate_pixel_buffer(grid.cells().iter().copied(), &self.colours, self.raster)
            .map_err(|err| DisplayError::Surface(err.to_string()))?;
        copy_rgb_to_rgba(rgb.buffer(), &mut self.base);

        Ok(())
    }

    fn draw_rect_outline(&mut self, rect: PixelRect) {
        self.outlines.push(rect);
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        let mut frame = std::mem::take(&mut self.frame);
        let result = self.compose_into(&mut frame);
        self.frame = frame;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster() -> RasterSize {
        RasterSize::new(4, 4).unwrap()
    }

    fn pixel(frame: &[u8], x: usize, y: usize) -> &[u8] {
        let index = (y * 4 + x) * 4;
        &frame[index..index + 4]
    }

    fn checkered_grid() -> ClassificationGrid {
        let cells = (0..16).map(|i| (i % 4 + i / 4) % 2 == 0).collect();
        ClassificationGrid::from_cells(raster(), cells).unwrap()
    }

    #[test]
    fn present_paints_members_black_and_outside_white() {
        let mut compositor = FrameCompositor::new(raster());

        compositor.submit_grid(&checkered_grid()).unwrap();
        compositor.present().unwrap();

        assert_eq!(pixel(compositor.frame(), 0, 0), &[0, 0, 0, 255]);
        assert_eq!(pixel(compositor.frame(), 1, 0), &[255, 255, 255, 255]);
    }

    #[test]
    fn outlines_last_for_one_frame() {
        let mut compositor = FrameCompositor::new(raster());
        let all_outside = ClassificationGrid::from_cells(raster(), vec![false; 16]).unwrap();
        compositor.submit_grid(&all_outside).unwrap();

        compositor.draw_rect_outline(PixelRect::new(0, 0, 4, 4));
        compositor.present().unwrap();
        assert_eq!(pixel(compositor.frame(), 0, 0), &[0, 0, 0, 255]);
        assert_eq!(pixel(compositor.frame(), 3, 3), &[0, 0, 0, 255]);

        compositor.present().unwrap();
        assert_eq!(pixel(compositor.frame(), 0, 0), &[255, 255, 255, 255]);
    }

    #[test]
    fn grid_is_kept_across_presents() {
        let mut compositor = FrameCompositor::new(raster());
        compositor.submit_grid(&checkered_grid()).unwrap();

        compositor.present().unwrap();
        let first = compositor.frame().to_vec();
        compositor.present().unwrap();

        assert_eq!(compositor.frame(), first.as_slice());
    }

    #[test]
    fn submit_rejects_grid_of_other_size() {
        let mut compositor = FrameCompositor::new(raster());
        let grid =
            ClassificationGrid::from_cells(RasterSize::new(2, 2).unwrap(), vec![true; 4]).unwrap();

        assert_eq!(
            compositor.submit_grid(&grid),
            Err(DisplayError::SizeMismatch {
                grid_width: 2,
                grid_height: 2,
                width: 4,
                height: 4
            })
        );
    }

    #[test]
    fn compose_into_rejects_wrong_length() {
        let mut compositor = FrameCompositor::new(raster());
        let mut dst = vec![0; 10];

        assert!(matches!(
            compositor.compose_into(&mut dst),
            Err(DisplayError::Surface(_))
        ));
    }
}
