use std::time::{Duration, Instant};

use crate::controllers::viewer::events::ViewerKey;

/// Held state for the few inputs that act continuously.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys {
    shrink_selection: bool,
    grow_selection: bool,
    /// The size key that was pressed first while both are held.
    leading: Option<ViewerKey>,
    drag: bool,
    last_repeat: Option<Instant>,
}

impl HeldKeys {
    pub fn handle_key(&mut self, key: ViewerKey, pressed: bool) {
        match key {
            ViewerKey::ShrinkSelection => self.shrink_selection = pressed,
            ViewerKey::GrowSelection => self.grow_selection = pressed,
            ViewerKey::ResetView => return,
        }

        if pressed {
            self.leading.get_or_insert(key);
        } else if self.leading == Some(key) {
            self.leading = if self.shrink_selection {
                Some(ViewerKey::ShrinkSelection)
            } else if self.grow_selection {
                Some(ViewerKey::GrowSelection)
            } else {
                None
            };
        }
    }

    pub fn set_drag(&mut self, held: bool) {
        self.drag = held;
    }

    #[must_use]
    pub fn drag(&self) -> bool {
        self.drag
    }

    #[must_use]
    pub fn last_repeat(&self) -> Option<Instant> {
        self.last_repeat
    }

    /// Change to the selection fraction while a size key is held. With
    /// both held, the one pressed first keeps acting.
    #[must_use]
    pub fn selection_delta(&self, step: f64) -> f64 {
        match self.leading {
            Some(ViewerKey::ShrinkSelection) => -step,
            Some(ViewerKey::GrowSelection) => step,
            _ => 0.0,
        }
    }

    /// Returns true and records `now` when at least `interval` has passed
    /// since the last repeat.
    pub fn take_repeat(&mut self, now: Instant, interval: Duration) -> bool {
        let due = self
            .last_repeat
            .is_none_or(|last| now.saturating_duration_since(last) >= interval);

        if due {
            self.last_repeat = Some(now);
        }

        due
    }
}
