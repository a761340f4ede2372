//! Headless commands behind the `mandelbrot_viewer` binary.

pub mod args;
pub mod classify;
pub mod render;
