use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::viewer::events::ViewerEvent;
use crate::controllers::viewer::session::ViewerSession;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::translate;

/// Wires a window, a viewer session, the background render controller and
/// a presenter together for the lifetime of the event loop.
pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    session: ViewerSession,
    presenter: P,
    controller: InteractiveController,
    redraw_pending: bool,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        session: ViewerSession,
        presenter: P,
        controller: InteractiveController,
    ) -> Self {
        Self {
            window,
            session,
            presenter,
            controller,
            redraw_pending: true,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::UserEvent(GuiEvent::Wake) => {
                self.redraw_pending = true;
            }
            Event::AboutToWait => self.about_to_wait(elwt),
            _ => {}
        })
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let pointer = self.session.pointer();

        let viewer_event = match event {
            WindowEvent::CloseRequested => Some(ViewerEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                translate::key_event(event.physical_key, event.state, event.repeat)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                translate::mouse_button(button, state, pointer)
            }
            WindowEvent::MouseWheel { delta, .. } => translate::wheel(delta, pointer),
            WindowEvent::CursorMoved { position, .. } => Some(ViewerEvent::PointerMove(
                self.presenter.window_to_raster(position.x, position.y),
            )),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.presenter.render(self.session.selection_rect()) {
                    error!(%err, "render failed");
                    elwt.exit();
                }
                None
            }
            _ => None,
        };

        if let Some(viewer_event) = viewer_event {
            self.session.handle_event(viewer_event);
            self.redraw_pending = true;
        }
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        if self.session.should_quit() {
            debug!("quit requested");
            elwt.exit();
            return;
        }

        let now = Instant::now();
        self.session.tick(now);

        if let Some(request) = self.session.take_render_request() {
            let generation = self.controller.submit_request(Arc::new(request));
            debug!(generation, region_version = request.region_version, "render requested");
            self.redraw_pending = true;
        }

        if std::mem::take(&mut self.redraw_pending) {
            self.window.request_redraw();
        }

        match self.session.next_repeat_at(now) {
            Some(deadline) => {
                self.redraw_pending = true;
                elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            None => elwt.set_control_flow(ControlFlow::Wait),
        }
    }
}
