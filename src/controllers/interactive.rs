use crate::controllers::data::frame_data::FrameData;
use crate::controllers::data::render_request::RenderRequest;
use crate::controllers::errors::render::RenderError;
use crate::controllers::events::render_event::RenderEvent;
use crate::controllers::ports::frame_sink::FrameSinkPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_escape_grid::generate_escape_grid_rayon::{
    generate_escape_grid_rayon_cancelable, GenerateEscapeGridError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer_cancelable, GeneratePixelBufferCancelableError, GeneratePixelBufferError,
};
use crate::core::colour_mapping::gradient::{GradientError, GradientInterpolation};
use crate::core::colour_mapping::palette::Palette;
use crate::core::colour_mapping::theme::ThemeRegistry;
use crate::core::colour_mapping::theme_colour_map::ThemeColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_algorithm::EscapeTimeAlgorithm;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    frame_sink: Arc<dyn FrameSinkPort>,
    // Appends happen under this lock; each frame snapshots its gradient up
    // front so the lock is never held while pixels compute.
    registry: Mutex<ThemeRegistry>,
}

/// Background render service for animation-driven redraws.
///
/// Requests supersede each other: submitting a new one bumps the generation
/// counter, which the in-flight render observes through its cancellation
/// token and abandons the stale frame. Only frames whose generation is
/// still current reach the sink, so the presentation layer never sees a
/// half-updated or out-of-order buffer.
pub struct InteractiveRenderer {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveRenderer {
    #[must_use]
    pub fn new(frame_sink: Arc<dyn FrameSinkPort>, registry: ThemeRegistry) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            frame_sink,
            registry: Mutex::new(registry),
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

    /// Queues a frame, superseding whatever is rendering. Returns the
    /// request's generation number.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Appends a user-painted gradient theme. Safe to call while a frame is
    /// rendering; the running frame keeps its snapshot.
    pub fn register_gradient(
        &self,
        name: impl Into<String>,
        palette: &Palette,
        levels: usize,
        interpolation: GradientInterpolation,
    ) -> Result<usize, GradientError> {
        self.shared
            .registry
            .lock()
            .unwrap()
            .register_gradient(name, palette, levels, interpolation)
    }

    #[must_use]
    pub fn theme_names(&self) -> Vec<String> {
        self.shared
            .registry
            .lock()
            .unwrap()
            .theme_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(shared, &request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(Some(pixel_buffer)) => {
                    let current_generation = shared.generation.load(Ordering::Acquire);

                    // A newer request landed while colours were mapping;
                    // drop this frame.
                    if job_generation != current_generation {
                        continue;
                    }

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);

                    shared.frame_sink.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));
                }
                Ok(None) => {
                    // Cancelled mid-flight; the newer request is already
                    // queued.
                }
                Err(error) => {
                    log::warn!("render generation {} failed: {}", job_generation, error);
                    shared.frame_sink.present(RenderEvent::Error(error));
                }
            }
        }
    }

    /// Renders one request; `Ok(None)` means the frame was superseded.
    fn render_request<C: CancelToken>(
        shared: &Arc<SharedState>,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<Option<PixelBuffer>, RenderError> {
        let theme = {
            let registry = shared.registry.lock().unwrap();
            registry.resolve(request.theme_id)?
        };

        let algorithm = EscapeTimeAlgorithm::new(request.canvas, request.params);

        let grid = match generate_escape_grid_rayon_cancelable(request.canvas, &algorithm, cancel)
        {
            Ok(grid) => grid,
            Err(GenerateEscapeGridError::Cancelled(_)) => return Ok(None),
            Err(err @ GenerateEscapeGridError::Algorithm(_)) => {
                return Err(RenderError::EscapeGrid(err));
            }
        };

        let colour_map = ThemeColourMap::new(
            theme,
            &request.params,
            request.shift_percent,
            request.interpolate,
        );

        match generate_pixel_buffer_cancelable(grid, &colour_map, request.canvas, cancel) {
            Ok(pixel_buffer) => Ok(Some(pixel_buffer)),
            Err(GeneratePixelBufferCancelableError::Cancelled(_)) => Ok(None),
            Err(GeneratePixelBufferCancelableError::ColourMap(err)) => Err(
                RenderError::PixelBuffer(GeneratePixelBufferError::ColourMap(err)),
            ),
            Err(GeneratePixelBufferCancelableError::PixelBuffer(err)) => Err(
                RenderError::PixelBuffer(GeneratePixelBufferError::PixelBuffer(err)),
            ),
        }
    }
}

impl Drop for InteractiveRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
