use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mandelbrot_viewer::core::actions::cancellation::NeverCancel;
use mandelbrot_viewer::core::data::raster_size::RasterSize;
use mandelbrot_viewer::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use mandelbrot_viewer::core::fractals::mandelbrot::evaluator::{GridStrategy, evaluate_grid};
use mandelbrot_viewer::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_MAX_ITERATIONS, default_region,
};
use mandelbrot_viewer::core::transform::coordinate_transform::CoordinateTransform;

fn bench_compute_grid(c: &mut Criterion) {
    let Ok(raster) = RasterSize::new(1024, 512) else {
        return;
    };
    let transform = CoordinateTransform::new(default_region(), raster);

    let mut group = c.benchmark_group("compute_grid_1024x512");

    for iterations in [DEFAULT_MAX_ITERATIONS, 500] {
        let Ok(algorithm) = MandelbrotAlgorithm::new(transform, iterations) else {
            continue;
        };

        for (name, strategy) in [
            ("sequential", GridStrategy::Sequential),
            ("rayon", GridStrategy::Parallel),
        ] {
            group.bench_with_input(BenchmarkId::new(name, iterations), &algorithm, |b, alg| {
                b.iter(|| evaluate_grid(black_box(alg), strategy, &NeverCancel))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute_grid);
criterion_main!(benches);
