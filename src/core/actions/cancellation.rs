use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use thiserror::Error;

pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Fires once a newer render generation has been submitted or shutdown
/// was requested, so work for a superseded region stops early.
#[derive(Debug, Clone, Copy)]
pub struct SupersededToken<'a> {
    generation: u64,
    latest_generation: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> SupersededToken<'a> {
    #[must_use]
    pub fn new(generation: u64, latest_generation: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest_generation,
            shutdown,
        }
    }
}

impl CancelToken for SupersededToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.generation != self.latest_generation.load(Ordering::Relaxed)
    }
}
