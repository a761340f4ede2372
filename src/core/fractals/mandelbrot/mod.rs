pub mod algorithm;
pub mod errors;
pub mod evaluator;
pub mod mandelbrot_config;
