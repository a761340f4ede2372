use std::convert::Infallible;
use std::sync::Arc;

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, classify};
use crate::core::fractals::mandelbrot::errors::{EvaluateGridError, MandelbrotError};
use crate::core::transform::coordinate_transform::CoordinateTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStrategy {
    Sequential,
    #[default]
    Parallel,
}

/// Classifies the whole raster for `algorithm`, polling `cancel` between
/// rows. Parallel and sequential evaluation yield identical grids.
pub fn evaluate_grid<C: CancelToken>(
    algorithm: &MandelbrotAlgorithm,
    strategy: GridStrategy,
    cancel: &C,
) -> Result<ClassificationGrid, EvaluateGridError> {
    let raster = algorithm.transform().raster();

    let cells = match strategy {
        GridStrategy::Sequential => {
            generate_fractal(raster, algorithm).unwrap_or_else(|never: Infallible| match never {})
        }
        GridStrategy::Parallel => generate_fractal_parallel_rayon_cancelable(raster, algorithm, cancel)
            .map_err(|e| match e {
                GenerateFractalError::Cancelled(cancelled) => cancelled,
                GenerateFractalError::Algorithm(never) => match never {},
            })?,
    };

    Ok(ClassificationGrid::from_cells(raster, cells)?)
}

/// Escape-time classifier with a one-entry grid cache.
///
/// The cache is keyed by the full transform, so asking again for the same
/// region and raster returns the previously computed grid unchanged.
#[derive(Debug)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
    strategy: GridStrategy,
    cached: Option<(CoordinateTransform, Arc<ClassificationGrid>)>,
}

impl EscapeTimeEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        Self::with_strategy(max_iterations, GridStrategy::default())
    }

    pub fn with_strategy(max_iterations: u32, strategy: GridStrategy) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            strategy,
            cached: None,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn classify(&self, c: Complex) -> bool {
        classify(c, self.max_iterations)
    }

    pub fn compute_grid(
        &mut self,
        transform: CoordinateTransform,
    ) -> Result<Arc<ClassificationGrid>, EvaluateGridError> {
        if let Some((cached_transform, grid)) = &self.cached {
            if *cached_transform == transform {
                tracing::trace!("classification grid cache hit");
                return Ok(Arc::clone(grid));
            }
        }

        let algorithm = MandelbrotAlgorithm::new(transform, self.max_iterations)?;
        let grid = Arc::new(evaluate_grid(&algorithm, self.strategy, &NeverCancel)?);

        tracing::debug!(
            width = transform.raster().width(),
            height = transform.raster().height(),
            members = grid.member_count(),
            "classification grid computed"
        );

        self.cached = Some((transform, Arc::clone(&grid)));
        Ok(grid)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::interval::Interval;
    use crate::core::data::point::Point;
    use crate::core::data::raster_size::RasterSize;
    use crate::core::data::region::Region;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn transform(width: u32, height: u32) -> CoordinateTransform {
        let region = Region::new(Interval::new(-2.0, 1.0), Interval::new(-1.0, 1.0)).unwrap();
        CoordinateTransform::new(region, RasterSize::new(width, height).unwrap())
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        assert!(matches!(
            EscapeTimeEvaluator::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        ));
    }

    #[test]
    fn test_grid_matches_per_pixel_classification() {
        let mut evaluator = EscapeTimeEvaluator::new(50).unwrap();
        let transform = transform(64, 32);

        let grid = evaluator.compute_grid(transform).unwrap();

        for y in 0..32 {
            for x in 0..64 {
                let pixel = Point { x, y };
                assert_eq!(
                    grid.get(pixel),
                    Some(evaluator.classify(transform.pixel_to_coord(pixel))),
                    "{pixel:?}"
                );
            }
        }
    }

    #[test]
    fn test_parallel_and_sequential_grids_are_identical() {
        let transform = transform(97, 41);
        let algorithm = MandelbrotAlgorithm::new(transform, 50).unwrap();

        let sequential = evaluate_grid(&algorithm, GridStrategy::Sequential, &NeverCancel).unwrap();
        let parallel = evaluate_grid(&algorithm, GridStrategy::Parallel, &NeverCancel).unwrap();

        assert_eq!(sequential, parallel);
        assert!(sequential.member_count() > 0);
        assert!(sequential.member_count() < 97 * 41);
    }

    #[test]
    fn test_unchanged_transform_returns_cached_grid() {
        let mut evaluator = EscapeTimeEvaluator::new(50).unwrap();
        let transform = transform(32, 16);

        let first = evaluator.compute_grid(transform).unwrap();
        let second = evaluator.compute_grid(transform).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_recomputed_grid_is_bit_identical() {
        let mut evaluator = EscapeTimeEvaluator::new(50).unwrap();
        let transform = transform(32, 16);

        let first = evaluator.compute_grid(transform).unwrap();
        evaluator.invalidate();
        let second = evaluator.compute_grid(transform).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_changed_transform_recomputes() {
        let mut evaluator = EscapeTimeEvaluator::new(50).unwrap();
        let zoomed = CoordinateTransform::new(
            Region::new(Interval::new(-0.3, 0.1), Interval::new(-0.2, 0.2)).unwrap(),
            RasterSize::new(32, 16).unwrap(),
        );

        let first = evaluator.compute_grid(transform(32, 16)).unwrap();
        let second = evaluator.compute_grid(zoomed).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        // the zoomed view around the origin is entirely inside the main cardioid
        assert_eq!(second.member_count(), 32 * 16);
    }

    #[test]
    fn test_cancelled_evaluation_returns_cancelled() {
        let algorithm = MandelbrotAlgorithm::new(transform(16, 16), 50).unwrap();
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = evaluate_grid(&algorithm, GridStrategy::Parallel, &token);

        assert!(matches!(result, Err(EvaluateGridError::Cancelled(_))));
    }
}
