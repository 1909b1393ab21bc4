// Frame scheduling primitives shared by every effect.
//
// The browser side implements [`FrameScheduler`] on top of
// `requestAnimationFrame`; tests drive the same state machines with a fake
// scheduler that simply counts outstanding requests.

use crate::constants::MAX_FRAME_DELTA_SEC;

/// Opaque id returned by the platform for a scheduled frame callback.
pub type FrameHandle = i32;

pub trait FrameScheduler {
    /// Ask for one callback on the next display refresh. `None` means the
    /// platform refused (no window, detached document).
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// At most one outstanding frame request.
///
/// Requesting again replaces the pending request, so bursts of input never
/// queue more than one callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSlot {
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    pub fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.cancel(scheduler);
        self.pending = scheduler.request_frame();
        self.pending.is_some()
    }

    /// Cancel the pending request, if any. Safe to call repeatedly.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Mark the pending request as delivered. Called first thing in the
    /// frame callback so a later `cancel` does not target a spent handle.
    #[inline]
    pub fn fired(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Continuous frame loop with delta tracking.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    slot: FrameSlot,
    last_ts_ms: Option<f64>,
    running: bool,
}

impl FrameClock {
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_ts_ms = None;
        self.slot.request(scheduler);
    }

    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.running = false;
        self.slot.cancel(scheduler);
    }

    /// Handle one frame callback at `ts_ms` (the rAF high-resolution
    /// timestamp). Returns the elapsed seconds since the previous frame and
    /// schedules the next one, or `None` if the clock was stopped.
    ///
    /// The first frame yields a zero delta; backwards or stalled clocks
    /// yield zero and large jumps are capped.
    pub fn tick<S: FrameScheduler + ?Sized>(&mut self, ts_ms: f64, scheduler: &mut S) -> Option<f64> {
        self.slot.fired();
        if !self.running {
            return None;
        }
        let dt = match self.last_ts_ms {
            Some(prev) => frame_delta_sec(prev, ts_ms),
            None => 0.0,
        };
        self.last_ts_ms = Some(ts_ms);
        self.slot.request(scheduler);
        Some(dt)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.slot.is_pending()
    }
}

#[inline]
pub fn frame_delta_sec(prev_ms: f64, now_ms: f64) -> f64 {
    let dt = (now_ms - prev_ms) / 1000.0;
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA_SEC)
    } else {
        0.0
    }
}
