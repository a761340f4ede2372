use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a binary (P6) PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let raster = buffer.raster();

    // P6: binary RGB, then width height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(filepath)?;
        write_ppm(buffer, BufWriter::new(file))
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster_size::RasterSize;

    #[test]
    fn test_write_ppm_header_and_body() {
        let raster = RasterSize::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(raster, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 255, 255, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_presenter_writes_file() {
        let raster = RasterSize::new(1, 1).unwrap();
        let buffer = PixelBuffer::from_data(raster, vec![10, 20, 30]).unwrap();
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_viewer_ppm_test_{}.ppm",
            std::process::id()
        ));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, b"P6\n1 1\n255\n\x0a\x14\x1e".to_vec());
    }
}
