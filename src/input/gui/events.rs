/// Custom user events for the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    ///
    /// Receiving this does not redraw by itself; the handler requests a
    /// redraw so the presenter picks the frame up on the UI thread.
    Wake,
}
