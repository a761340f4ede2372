use crate::controllers::interactive::events::render::RenderEvent;

/// Receives finished grids and render failures from the worker thread.
/// Implementations must not block; the worker waits on `present`.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
