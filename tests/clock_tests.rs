// Host-side tests for the frame clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
}
mod common;

use crate::core::clock::*;
use common::FakeScheduler;
use constants::MAX_FRAME_DELTA_SEC;

#[test]
fn start_schedules_exactly_one_frame() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.start(&mut s);
    clock.start(&mut s);
    assert_eq!(s.outstanding.len(), 1);
    assert!(clock.is_running());
    assert!(clock.is_pending());
}

#[test]
fn mount_then_unmount_leaves_no_outstanding_frames() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.start(&mut s);
    clock.stop(&mut s);
    assert!(s.outstanding.is_empty());
    assert_eq!(s.cancelled, 1);
    assert!(!clock.is_pending());
}

#[test]
fn stop_is_idempotent_and_safe_before_start() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.stop(&mut s);
    clock.start(&mut s);
    clock.stop(&mut s);
    clock.stop(&mut s);
    assert_eq!(s.cancelled, 1);
    assert!(s.outstanding.is_empty());
}

#[test]
fn tick_reschedules_and_reports_deltas() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.start(&mut s);

    s.fire();
    let dt0 = clock.tick(1000.0, &mut s).unwrap();
    assert_eq!(dt0, 0.0, "first frame has no previous timestamp");
    assert_eq!(s.outstanding.len(), 1);

    s.fire();
    let dt1 = clock.tick(1016.0, &mut s).unwrap();
    assert!((dt1 - 0.016).abs() < 1e-9);
    assert_eq!(s.outstanding.len(), 1);
}

#[test]
fn backwards_and_stalled_clocks_yield_zero_delta() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.start(&mut s);
    s.fire();
    clock.tick(5000.0, &mut s);
    s.fire();
    assert_eq!(clock.tick(5000.0, &mut s), Some(0.0));
    s.fire();
    assert_eq!(clock.tick(4000.0, &mut s), Some(0.0));
}

#[test]
fn large_jumps_are_capped() {
    assert_eq!(frame_delta_sec(0.0, 60_000.0), MAX_FRAME_DELTA_SEC);
    assert_eq!(frame_delta_sec(0.0, f64::NAN), 0.0);
}

#[test]
fn tick_after_stop_does_not_reschedule() {
    let mut s = FakeScheduler::default();
    let mut clock = FrameClock::default();
    clock.start(&mut s);
    // Frame already delivered by the platform when teardown happens.
    s.fire();
    clock.stop(&mut s);
    assert_eq!(clock.tick(16.0, &mut s), None);
    assert!(s.outstanding.is_empty());
}

#[test]
fn slot_keeps_at_most_one_request() {
    let mut s = FakeScheduler::default();
    let mut slot = FrameSlot::default();
    for _ in 0..10 {
        slot.request(&mut s);
    }
    assert_eq!(s.outstanding.len(), 1);
    assert_eq!(s.requested, 10);
    assert_eq!(s.cancelled, 9);
    slot.cancel(&mut s);
    slot.cancel(&mut s);
    assert!(s.outstanding.is_empty());
}

#[test]
fn refused_request_is_not_pending() {
    let mut s = FakeScheduler::refusing();
    let mut slot = FrameSlot::default();
    assert!(!slot.request(&mut s));
    assert!(!slot.is_pending());
    slot.cancel(&mut s);
    assert_eq!(s.cancelled, 0);
}
