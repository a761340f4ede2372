//! Pixel format helpers for presentation adapters.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::raster_size::RasterSize;

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Arguments
/// * `src` - Source buffer with RGB data (3 bytes per pixel)
/// * `dst` - Destination buffer for RGBA data (4 bytes per pixel)
///
/// # Panics
/// Panics if buffer sizes don't match (dst.len() must equal src.len() / 3 * 4)
/// or if `src` is not a multiple of 3.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 3 == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / 3) * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}

/// Draws a rectangle outline `thickness` pixels wide into an RGBA frame,
/// growing inwards from the rectangle edges. Parts outside the raster are
/// clipped.
///
/// # Panics
/// Panics if `frame` is not `raster.width() * raster.height() * 4` bytes.
pub fn draw_rect_outline(
    frame: &mut [u8],
    raster: RasterSize,
    rect: PixelRect,
    thickness: u32,
    colour: Colour,
) {
    assert_eq!(
        frame.len(),
        raster.pixel_count() * 4,
        "frame length {} does not match {}x{} raster",
        frame.len(),
        raster.width(),
        raster.height()
    );

    if rect.is_empty() || thickness == 0 {
        return;
    }

    let width = i64::from(raster.width());
    let height = i64::from(raster.height());
    let left = i64::from(rect.left());
    let top = i64::from(rect.top());
    let right = left + i64::from(rect.width());
    let bottom = top + i64::from(rect.height());
    let band = i64::from(thickness);

    let x_range = left.max(0)..right.min(width);
    for y in top.max(0)..bottom.min(height) {
        let on_horizontal_edge = y < top + band || y >= bottom - band;

        for x in x_range.clone() {
            let on_vertical_edge = x < left + band || x >= right - band;
            if !(on_horizontal_edge || on_vertical_edge) {
                continue;
            }

            let index = ((y * width + x) * 4) as usize;
            frame[index] = colour.r;
            frame[index + 1] = colour.g;
            frame[index + 2] = colour.b;
            frame[index + 3] = 255;
        }
    }
}
