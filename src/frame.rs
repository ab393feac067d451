//! Stop handle for the self-rescheduling animation-frame loop.
//!
//! The host schedules one frame request at a time and asks the handle before
//! running each frame. Once stopped, the loop runs no further frames and the
//! host cancels whatever request is still pending.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct LoopState {
    stopped: Cell<bool>,
    frames: Cell<u64>,
    pending: Cell<Option<i32>>,
}

/// Shared handle to one frame loop. Clones observe the same loop.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }

    /// Claim the next frame. Returns `false` once the loop has been stopped.
    pub fn begin_frame(&self) -> bool {
        self.state.pending.set(None);
        if self.state.stopped.get() {
            return false;
        }
        self.state.frames.set(self.state.frames.get().saturating_add(1));
        true
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }

    /// Record the host's id for the next scheduled frame.
    pub fn set_pending(&self, request_id: i32) {
        self.state.pending.set(Some(request_id));
    }

    /// Stop the loop and hand back the pending request id for cancellation.
    pub fn stop(&self) -> Option<i32> {
        self.state.stopped.set(true);
        self.state.pending.take()
    }
}
