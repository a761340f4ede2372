//! Background grid evaluation for the interactive viewer.
//!
//! Requests carry the region version they were built from. Only the newest
//! request is rendered and results for superseded requests are dropped, so
//! every presented grid belongs to the region that asked for it.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
