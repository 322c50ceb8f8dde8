//! Frame scheduling port.

/// Identifies one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Requests and cancels the callback that runs the next tick.
///
/// The host calls [`Controller::on_frame`](crate::Controller::on_frame) with
/// the handle once the frame is due. The controller reports the delivery
/// back through [`frame_fired`](FrameScheduler::frame_fired) before it
/// requests the next frame.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
    /// The frame for `handle` was delivered and is no longer pending.
    fn frame_fired(&mut self, handle: FrameHandle);
}

/// Scheduler that only records requests; ticks are driven by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: usize,
    canceled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame waiting to run, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Take the pending frame so the caller can run it.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Total frames requested so far.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total frames canceled so far.
    pub fn canceled(&self) -> usize {
        self.canceled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        debug_assert!(self.pending.is_none(), "a frame is already pending");
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.canceled += 1;
        }
    }

    fn frame_fired(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fired_frame_clears_pending() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.request_frame();
        scheduler.frame_fired(first);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.canceled(), 0);

        let second = scheduler.request_frame();
        assert_ne!(first, second);
        scheduler.frame_fired(first);
        assert_eq!(scheduler.pending(), Some(second));
    }
}
