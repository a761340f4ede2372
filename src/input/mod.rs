//! Input adapters for the viewer.
//!
//! Each adapter receives input from a windowing system and translates it
//! into [`ViewerEvent`](crate::controllers::viewer::events::ViewerEvent)s.

pub mod gui;
