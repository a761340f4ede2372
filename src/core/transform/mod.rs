//! Mapping between raster pixels and the complex plane.

pub mod axis_mapping;
pub mod coordinate_transform;
