//! Wall-clock frame scheduler for the terminal loop.

use std::time::{Duration, Instant};

use lumen_particles::{FrameHandle, FrameScheduler};

/// Schedules each requested frame one frame interval after the request.
#[derive(Debug)]
pub struct TimedScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl TimedScheduler {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            next_id: 0,
            pending: None,
        }
    }

    /// Time left until the pending frame is due, if one is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the pending frame if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    fn request_at(&mut self, now: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.pending = Some((handle, now + self.interval));
        handle
    }
}

impl FrameScheduler for TimedScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.request_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.is_some_and(|(pending, _)| pending == handle) {
            self.pending = None;
        }
    }

    fn frame_fired(&mut self, handle: FrameHandle) {
        self.cancel_frame(handle);
    }
}
