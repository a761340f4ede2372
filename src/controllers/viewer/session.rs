use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::viewer::config::ViewerConfig;
use crate::controllers::viewer::events::{PointerButton, ViewerEvent, ViewerKey};
use crate::controllers::viewer::held_keys::HeldKeys;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::viewport::controller::ViewportController;
use crate::core::viewport::errors::ViewportError;

/// All mutable state of one running viewer.
///
/// Input is applied through [`handle_event`](Self::handle_event) and
/// [`tick`](Self::tick); [`take_render_request`](Self::take_render_request)
/// yields a request only after the region actually changed.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    viewport: ViewportController,
    held: HeldKeys,
    pointer: Point,
    quit: bool,
    home_region: Region,
    max_iterations: u32,
    zoom_step: f64,
    zoom_repeat_interval: Duration,
}

impl ViewerSession {
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            viewport: ViewportController::new(
                config.mandelbrot.region,
                config.raster,
                config.zoom_selection_fraction,
            ),
            held: HeldKeys::default(),
            pointer: Point::default(),
            quit: false,
            home_region: config.mandelbrot.region,
            max_iterations: config.mandelbrot.max_iterations,
            zoom_step: config.zoom_step,
            zoom_repeat_interval: config.zoom_repeat_interval,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// The pointer is also updated by motion events; this covers sources
    /// that only answer position queries.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn selection_rect(&self) -> PixelRect {
        self.viewport.selection_rect(self.pointer)
    }

    pub fn handle_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Quit => self.quit = true,
            ViewerEvent::KeyDown(ViewerKey::ResetView) => {
                debug!("reset view");
                self.held.set_drag(false);
                self.viewport.reset_view(self.home_region);
            }
            ViewerEvent::KeyDown(key) => self.held.handle_key(key, true),
            ViewerEvent::KeyUp(key) => self.held.handle_key(key, false),
            ViewerEvent::ButtonDown(PointerButton::Drag, pointer) => {
                self.pointer = pointer;
                self.held.set_drag(true);
                self.viewport.begin_drag(pointer);
            }
            ViewerEvent::ButtonUp(PointerButton::Drag, pointer) => {
                self.pointer = pointer;
                self.held.set_drag(false);
                self.viewport.end_drag();
            }
            ViewerEvent::ButtonUp(PointerButton::WheelUp, pointer) => {
                self.pointer = pointer;
                let result = self.viewport.zoom_in(pointer);
                Self::log_rejected("zoom in", result);
            }
            ViewerEvent::ButtonUp(PointerButton::WheelDown, pointer) => {
                self.pointer = pointer;
                let result = self.viewport.zoom_out(pointer);
                Self::log_rejected("zoom out", result);
            }
            ViewerEvent::ButtonDown(PointerButton::WheelUp | PointerButton::WheelDown, pointer) => {
                self.pointer = pointer;
            }
            ViewerEvent::PointerMove(pointer) => {
                self.pointer = pointer;
                if self.held.drag() {
                    let result = self.viewport.update_drag(pointer);
                    Self::log_rejected("pan", result);
                }
            }
        }
    }

    /// Applies held-key repeats, at most once per repeat interval.
    pub fn tick(&mut self, now: Instant) {
        let delta = self.held.selection_delta(self.zoom_step);
        if delta == 0.0 {
            return;
        }

        if self.held.take_repeat(now, self.zoom_repeat_interval) {
            self.viewport.adjust_zoom_selection_size(delta);
        }
    }

    /// When the next held-key repeat falls due, or `None` while no size
    /// key is held. Event-driven front ends use this as their wake-up time.
    #[must_use]
    pub fn next_repeat_at(&self, now: Instant) -> Option<Instant> {
        if self.held.selection_delta(self.zoom_step) == 0.0 {
            return None;
        }

        Some(
            self.held
                .last_repeat()
                .map_or(now, |last| last + self.zoom_repeat_interval),
        )
    }

    pub fn take_render_request(&mut self) -> Option<RenderRequest> {
        if !self.viewport.take_dirty() {
            return None;
        }

        Some(RenderRequest {
            region_version: self.viewport.region_version(),
            transform: self.viewport.transform(),
            max_iterations: self.max_iterations,
        })
    }

    fn log_rejected(operation: &str, result: Result<(), ViewportError>) {
        if let Err(err) = result {
            warn!(%err, "{operation} rejected");
        }
    }
}
