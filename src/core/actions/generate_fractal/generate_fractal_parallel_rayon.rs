use rayon::prelude::*;

use thiserror::Error;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;

/// Error type for cancelable fractal generation.
///
/// Separates algorithm failures from cancellation so callers can drop
/// superseded work silently.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Evaluates the raster row-parallel on rayon's work-stealing scheduler.
/// Output is row-major and identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
///
/// `cancel` is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    raster: RasterSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let width = raster.width() as i32;
    let height = raster.height() as i32;
    let row_width = raster.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..width {
                if (x as usize) % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
