use crate::core::data::point::Point;

/// Keys the viewer reacts to, after translation from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    ShrinkSelection,
    GrowSelection,
    ResetView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Drag,
    WheelUp,
    WheelDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Quit,
    KeyDown(ViewerKey),
    KeyUp(ViewerKey),
    ButtonDown(PointerButton, Point),
    ButtonUp(PointerButton, Point),
    PointerMove(Point),
}
