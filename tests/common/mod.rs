// Fake frame scheduler shared by the host-side tests. Requires the including
// test crate to provide `crate::core::clock`.

use crate::core::clock::{FrameHandle, FrameScheduler};

#[derive(Default)]
pub struct FakeScheduler {
    next: FrameHandle,
    pub outstanding: Vec<FrameHandle>,
    pub requested: usize,
    pub cancelled: usize,
    pub refuse: bool,
}

impl FakeScheduler {
    /// A scheduler whose every request fails, like a detached window.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Default::default()
        }
    }

    /// Deliver the oldest outstanding frame, as the browser would.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.outstanding.is_empty() {
            None
        } else {
            Some(self.outstanding.remove(0))
        }
    }
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.requested += 1;
        self.outstanding.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        // Cancelling a delivered or unknown handle is a no-op, as in browsers.
        self.outstanding.retain(|h| *h != handle);
        self.cancelled += 1;
    }
}
