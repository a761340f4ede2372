use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;

/// Evaluates every pixel of the raster in row-major order on the calling
/// thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    raster: RasterSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = raster.width() as i32;
    let height = raster.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
