//! Cancellable one-shot frame tasks.
//!
//! Models the self-rescheduling per-frame callback chain: each scheduled
//! frame is a one-shot task identified by a stable key. Running a frame
//! consumes its key and requests the next one; cancelling on every exit
//! path is what prevents a dangling frame callback from running against a
//! torn-down render context.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to one pending frame task
    pub struct FrameTaskKey;
}

/// Registry of pending frame tasks.
#[derive(Default)]
pub struct FrameScheduler {
    pending: SlotMap<FrameTaskKey, ()>,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            pending: SlotMap::with_key(),
        }
    }

    /// Schedule the next frame, returning its handle.
    pub fn request_frame(&mut self) -> FrameTaskKey {
        self.pending.insert(())
    }

    /// Cancel a pending frame. Returns false when the handle was already
    /// consumed or cancelled (safe to call repeatedly).
    pub fn cancel(&mut self, key: FrameTaskKey) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Consume a due frame task. Returns false when the handle is no longer
    /// pending (cancelled elsewhere); the caller must then not render.
    pub fn take(&mut self, key: FrameTaskKey) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Whether the handle still refers to a pending frame.
    pub fn is_pending(&self, key: FrameTaskKey) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of outstanding frame tasks.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
#[path = "frame_scheduler_tests.rs"]
mod tests;
