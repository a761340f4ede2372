use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::{CancelToken, SupersededToken};
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::EvaluateGridError;
use crate::core::fractals::mandelbrot::evaluator::{GridStrategy, evaluate_grid};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Replaces any pending request and returns its generation. Work still
    /// running for an older generation is cancelled.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // the flag must change under the lock the worker waits with
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                SupersededToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(grid) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    region_version: request.region_version,
                    region: request.region(),
                    grid: Arc::new(grid),
                    render_duration,
                }),
                Err(RenderOutcome::Cancelled) => {
                    tracing::trace!(generation = job_generation, "render superseded");
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    tracing::warn!(generation = job_generation, %message, "render failed");
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message,
                    })
                }
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            tracing::debug!(
                generation = job_generation,
                region_version = request.region_version,
                ?render_duration,
                "render complete"
            );

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<ClassificationGrid, RenderOutcome> {
        let algorithm = MandelbrotAlgorithm::new(request.transform, request.max_iterations)
            .map_err(|err| RenderOutcome::Error(err.to_string()))?;

        evaluate_grid(&algorithm, GridStrategy::Parallel, cancel).map_err(|e| match e {
            EvaluateGridError::Cancelled(_) => RenderOutcome::Cancelled,
            other => RenderOutcome::Error(other.to_string()),
        })
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
