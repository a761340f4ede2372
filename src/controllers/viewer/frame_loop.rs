use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::controllers::viewer::ports::{DisplayError, DisplaySurface, InputSource};
use crate::controllers::viewer::session::ViewerSession;
use crate::core::fractals::mandelbrot::errors::EvaluateGridError;
use crate::core::fractals::mandelbrot::evaluator::EscapeTimeEvaluator;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("grid evaluation failed: {0}")]
    Evaluate(#[from] EvaluateGridError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue { rendered: bool },
    Quit,
}

/// One synchronous frame: drain input, apply held keys, recompute the grid
/// only if the region changed, then present it with the selection outline.
pub fn run_frame<I, D>(
    session: &mut ViewerSession,
    input: &mut I,
    display: &mut D,
    evaluator: &mut EscapeTimeEvaluator,
    now: Instant,
) -> Result<FrameOutcome, FrameError>
where
    I: InputSource,
    D: DisplaySurface,
{
    for event in input.poll_events() {
        session.handle_event(event);
    }

    if session.should_quit() {
        return Ok(FrameOutcome::Quit);
    }

    session.set_pointer(input.pointer_position());
    session.tick(now);

    let mut rendered = false;
    if let Some(request) = session.take_render_request() {
        let started = Instant::now();
        let grid = evaluator.compute_grid(request.transform)?;
        display.submit_grid(&grid)?;
        debug!(
            region_version = request.region_version,
            elapsed = ?started.elapsed(),
            "grid submitted"
        );
        rendered = true;
    }

    display.draw_rect_outline(session.selection_rect());
    display.present()?;

    Ok(FrameOutcome::Continue { rendered })
}

/// Runs frames until the input source asks to quit. Returns the number of
/// frames presented.
pub fn run_until_quit<I, D, C>(
    session: &mut ViewerSession,
    input: &mut I,
    display: &mut D,
    evaluator: &mut EscapeTimeEvaluator,
    mut clock: C,
) -> Result<u64, FrameError>
where
    I: InputSource,
    D: DisplaySurface,
    C: FnMut() -> Instant,
{
    let mut frames = 0;

    loop {
        match run_frame(session, input, display, evaluator, clock())? {
            FrameOutcome::Quit => return Ok(frames),
            FrameOutcome::Continue { .. } => frames += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewer::config::ViewerConfig;
    use crate::controllers::viewer::events::{PointerButton, ViewerEvent, ViewerKey};
    use crate::core::data::classification_grid::ClassificationGrid;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use crate::core::data::raster_size::RasterSize;
    use std::collections::VecDeque;
    use std::time::Duration;

    struct ScriptedInput {
        frames: VecDeque<Vec<ViewerEvent>>,
        pointer: Point,
    }

    impl ScriptedInput {
        fn new(frames: Vec<Vec<ViewerEvent>>) -> Self {
            Self {
                frames: frames.into(),
                pointer: Point { x: 32, y: 16 },
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll_events(&mut self) -> Vec<ViewerEvent> {
            let events = self.frames.pop_front().unwrap_or_default();
            for event in &events {
                if let ViewerEvent::PointerMove(p)
                | ViewerEvent::ButtonDown(_, p)
                | ViewerEvent::ButtonUp(_, p) = event
                {
                    self.pointer = *p;
                }
            }
            events
        }

        fn pointer_position(&self) -> Point {
            self.pointer
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        grids: Vec<ClassificationGrid>,
        outlines: Vec<PixelRect>,
        presents: usize,
    }

    impl DisplaySurface for RecordingDisplay {
        fn submit_grid(&mut self, grid: &ClassificationGrid) -> Result<(), DisplayError> {
            self.grids.push(grid.clone());
            Ok(())
        }

        fn draw_rect_outline(&mut self, rect: PixelRect) {
            self.outlines.push(rect);
        }

        fn present(&mut self) -> Result<(), DisplayError> {
            self.presents += 1;
            Ok(())
        }
    }

    struct FailingDisplay;

    impl DisplaySurface for FailingDisplay {
        fn submit_grid(&mut self, _: &ClassificationGrid) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_rect_outline(&mut self, _: PixelRect) {}

        fn present(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Surface("lost".to_string()))
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            raster: RasterSize::new(64, 32).unwrap(),
            ..ViewerConfig::default()
        }
    }

    fn setup() -> (ViewerSession, EscapeTimeEvaluator) {
        let config = small_config();
        (
            ViewerSession::new(&config),
            config.mandelbrot.build_evaluator().unwrap(),
        )
    }

    #[test]
    fn first_frame_renders_and_idle_frames_do_not() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![]);
        let mut display = RecordingDisplay::default();
        let now = Instant::now();

        let first = run_frame(&mut session, &mut input, &mut display, &mut evaluator, now).unwrap();
        let second = run_frame(&mut session, &mut input, &mut display, &mut evaluator, now).unwrap();

        assert_eq!(first, FrameOutcome::Continue { rendered: true });
        assert_eq!(second, FrameOutcome::Continue { rendered: false });
        assert_eq!(display.grids.len(), 1);
        assert_eq!(display.presents, 2);
        assert_eq!(display.outlines.len(), 2);
    }

    #[test]
    fn zoom_triggers_a_new_grid() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![
            vec![],
            vec![ViewerEvent::ButtonUp(PointerButton::WheelUp, Point { x: 32, y: 16 })],
        ]);
        let mut display = RecordingDisplay::default();
        let now = Instant::now();

        run_frame(&mut session, &mut input, &mut display, &mut evaluator, now).unwrap();
        let outcome = run_frame(&mut session, &mut input, &mut display, &mut evaluator, now).unwrap();

        assert_eq!(outcome, FrameOutcome::Continue { rendered: true });
        assert_eq!(display.grids.len(), 2);
        assert_ne!(display.grids[0], display.grids[1]);
    }

    #[test]
    fn outline_tracks_pointer_position() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![vec![ViewerEvent::PointerMove(Point { x: 10, y: 5 })]]);
        let mut display = RecordingDisplay::default();

        run_frame(&mut session, &mut input, &mut display, &mut evaluator, Instant::now()).unwrap();

        // 0.8 of 64x32 is 51x25
        assert_eq!(display.outlines, vec![PixelRect::new(10 - 25, 5 - 12, 51, 25)]);
    }

    #[test]
    fn quit_stops_before_presenting() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![vec![ViewerEvent::Quit]]);
        let mut display = RecordingDisplay::default();

        let outcome =
            run_frame(&mut session, &mut input, &mut display, &mut evaluator, Instant::now()).unwrap();

        assert_eq!(outcome, FrameOutcome::Quit);
        assert_eq!(display.presents, 0);
    }

    #[test]
    fn run_until_quit_counts_presented_frames() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![
            vec![ViewerEvent::KeyDown(ViewerKey::ShrinkSelection)],
            vec![],
            vec![ViewerEvent::KeyUp(ViewerKey::ShrinkSelection)],
            vec![ViewerEvent::Quit],
        ]);
        let mut display = RecordingDisplay::default();
        let start = Instant::now();
        let mut frame = 0;
        let clock = || {
            frame += 1;
            start + Duration::from_millis(10 * frame)
        };

        let frames = run_until_quit(&mut session, &mut input, &mut display, &mut evaluator, clock)
            .unwrap();

        assert_eq!(frames, 3);
        assert_eq!(display.grids.len(), 1);
        let fraction = session.viewport().zoom_selection().size_fraction();
        assert!((fraction - 0.79).abs() < 1e-12, "{fraction}");
    }

    #[test]
    fn display_failure_is_reported() {
        let (mut session, mut evaluator) = setup();
        let mut input = ScriptedInput::new(vec![]);

        let result = run_frame(
            &mut session,
            &mut input,
            &mut FailingDisplay,
            &mut evaluator,
            Instant::now(),
        );

        assert!(matches!(result, Err(FrameError::Display(DisplayError::Surface(_)))));
    }
}
