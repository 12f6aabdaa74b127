//! Explicit control for a self-rescheduling animation loop.
//!
//! The host re-queues the next frame only while [`FrameLoop::run_frame`]
//! returns [`LoopControl::Continue`]. A [`StopHandle`] clone can end the loop
//! from anywhere on the same thread.

use std::cell::Cell;
use std::rc::Rc;

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared stop flag. Single-threaded.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Frame counter plus stop state for one animation loop.
#[derive(Debug, Default)]
pub struct FrameLoop {
    stop: StopHandle,
    frames: u64,
    frame_limit: Option<u64>,
}

impl FrameLoop {
    /// A loop that runs until stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loop that stops by itself after `limit` frames.
    pub fn with_frame_limit(limit: u64) -> Self {
        Self {
            frame_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Number of frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Run one frame's work unless the loop is already stopped.
    pub fn run_frame(&mut self, step: impl FnOnce()) -> LoopControl {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }
        step();
        self.frames += 1;

        if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
            self.stop.stop();
            return LoopControl::Stop;
        }
        LoopControl::Continue
    }
}
