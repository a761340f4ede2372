//! Pan and zoom state for the viewed region.

pub mod controller;
pub mod drag;
pub mod errors;
pub mod zoom_selection;
