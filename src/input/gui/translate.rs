//! Pure mapping from winit input to viewer events.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::viewer::events::{PointerButton, ViewerEvent, ViewerKey};
use crate::core::data::point::Point;

pub fn key_event(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<ViewerEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };

    if code == KeyCode::Escape {
        return (state == ElementState::Pressed).then_some(ViewerEvent::Quit);
    }

    let key = match code {
        KeyCode::NumpadAdd | KeyCode::Equal => ViewerKey::ShrinkSelection,
        KeyCode::NumpadSubtract | KeyCode::Minus => ViewerKey::GrowSelection,
        KeyCode::KeyR => ViewerKey::ResetView,
        _ => return None,
    };

    match state {
        // OS auto-repeat is ignored; held keys repeat on the session tick
        ElementState::Pressed if repeat => None,
        ElementState::Pressed => Some(ViewerEvent::KeyDown(key)),
        ElementState::Released => Some(ViewerEvent::KeyUp(key)),
    }
}

pub fn mouse_button(button: MouseButton, state: ElementState, pointer: Point) -> Option<ViewerEvent> {
    if button != MouseButton::Left {
        return None;
    }

    Some(match state {
        ElementState::Pressed => ViewerEvent::ButtonDown(PointerButton::Drag, pointer),
        ElementState::Released => ViewerEvent::ButtonUp(PointerButton::Drag, pointer),
    })
}

/// Wheel notches arrive as a single event; they are reported as the
/// button-up that triggers a zoom.
pub fn wheel(delta: MouseScrollDelta, pointer: Point) -> Option<ViewerEvent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ViewerEvent::ButtonUp(PointerButton::WheelUp, pointer))
    } else if y < 0.0 {
        Some(ViewerEvent::ButtonUp(PointerButton::WheelDown, pointer))
    } else {
        None
    }
}
