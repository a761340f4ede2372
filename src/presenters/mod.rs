pub mod file;
pub mod frame_compositor;
#[cfg(feature = "gui")]
pub mod pixels;
