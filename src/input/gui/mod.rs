//! Windowed viewer built on winit, with a pixels framebuffer as the
//! display surface.

pub mod app;
pub mod commands;
pub mod events;
pub mod translate;
