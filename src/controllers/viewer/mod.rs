//! Single-threaded viewer session: input events in, render requests and
//! display calls out.

pub mod config;
pub mod events;
pub mod frame_loop;
pub mod held_keys;
pub mod ports;
pub mod session;
