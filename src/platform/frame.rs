//! Frame scheduling handle
//!
//! A [`FrameLoop`] owns the per-frame callback. Stopping it (explicitly, via a
//! [`StopHandle`], or by dropping it) cancels any pending frame and prevents
//! further scheduling.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(target_arch = "wasm32")]
use super::PlatformError;

/// Nominal frame interval for headless runs (60 Hz display)
pub const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Default)]
struct LoopShared {
    running: Cell<bool>,
    frames: Cell<u64>,
    /// Pending `requestAnimationFrame` id
    #[cfg(target_arch = "wasm32")]
    pending: Cell<Option<i32>>,
}

impl LoopShared {
    fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        self.cancel_pending();
        log::info!("Frame loop stopped after {} frames", self.frames.get());
    }

    #[cfg(target_arch = "wasm32")]
    fn cancel_pending(&self) {
        if let Some(id) = self.pending.take() {
            let cancelled = web_sys::window()
                .map(|window| window.cancel_animation_frame(id).map_err(PlatformError::from_js));
            if let Some(Err(e)) = cancelled {
                log::trace!("Pending frame {} not cancelled: {}", id, e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn cancel_pending(&self) {}
}

/// Cloneable way to stop a loop from inside callbacks or teardown hooks
#[derive(Debug, Clone)]
pub struct StopHandle {
    shared: Rc<LoopShared>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.shared.stop();
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }
}

/// Owned frame-scheduling handle
#[derive(Debug)]
pub struct FrameLoop {
    shared: Rc<LoopShared>,
}

impl FrameLoop {
    fn new_running() -> Self {
        let shared = Rc::new(LoopShared::default());
        shared.running.set(true);
        Self { shared }
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    /// Frames delivered so far
    pub fn frames(&self) -> u64 {
        self.shared.frames.get()
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            shared: self.shared.clone(),
        }
    }

    /// Stop scheduling; safe to call more than once
    pub fn stop(&mut self) {
        self.shared.stop();
    }

    /// A loop with no display attached, driven by [`FrameLoop::run_headless`]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn headless() -> Self {
        Self::new_running()
    }

    /// Deliver up to `max_frames` frames back to back, with synthetic
    /// timestamps. Returns how many frames ran.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_headless(&mut self, max_frames: u64, mut on_frame: impl FnMut(f64)) -> u64 {
        let mut ran = 0;
        while ran < max_frames && self.is_running() {
            let time = self.frames() as f64 * HEADLESS_FRAME_MS;
            on_frame(time);
            self.shared.frames.set(self.shared.frames.get() + 1);
            ran += 1;
        }
        ran
    }

    /// Start calling `on_frame` once per display refresh
    #[cfg(target_arch = "wasm32")]
    pub fn start(on_frame: impl FnMut(f64) + 'static) -> Result<Self, PlatformError> {
        let frame_loop = Self::new_running();
        let callback: FrameCallback = Rc::new(RefCell::new(Box::new(on_frame)));
        schedule(frame_loop.shared.clone(), callback)?;
        log::info!("Frame loop started");
        Ok(frame_loop)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

#[cfg(target_arch = "wasm32")]
type FrameCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

/// Request the next animation frame; the closure frees itself after firing
#[cfg(target_arch = "wasm32")]
fn schedule(shared: Rc<LoopShared>, callback: FrameCallback) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::NoWindow)?;

    let next_shared = shared.clone();
    let closure = Closure::once_into_js(move |time: f64| {
        next_shared.pending.set(None);
        if !next_shared.running.get() {
            return;
        }
        (callback.borrow_mut())(time);
        next_shared.frames.set(next_shared.frames.get() + 1);

        if next_shared.running.get() {
            if let Err(e) = schedule(next_shared.clone(), callback.clone()) {
                log::error!("Failed to schedule next frame: {}", e);
                next_shared.stop();
            }
        }
    });

    let id = window
        .request_animation_frame(closure.unchecked_ref())
        .map_err(PlatformError::from_js)?;
    shared.pending.set(Some(id));
    Ok(())
}
