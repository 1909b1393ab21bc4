// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn beam_ranges_are_non_empty_and_positive() {
    assert!(MINIMUM_BEAMS > 0);
    assert!(BEAM_WIDTH_SPAN > 0.0 && BEAM_SPEED_SPAN > 0.0);
    assert!(BEAM_SPEED_MIN > 0.0 && BEAM_RESET_SPEED_MIN > 0.0);
    assert!(BEAM_OPACITY_MIN > 0.0 && BEAM_RESET_OPACITY_MIN > 0.0);
    assert!(BEAM_PULSE_SPEED_MIN > 0.0);
    assert!(BEAM_COLUMNS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_modulation_never_goes_negative() {
    assert!(BEAM_PULSE_BASE - BEAM_PULSE_DEPTH >= 0.0);
    assert!(BEAM_PULSE_BASE + BEAM_PULSE_DEPTH <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intensities_are_ordered_fractions() {
    assert!(INTENSITY_SUBTLE < INTENSITY_MEDIUM);
    assert!(INTENSITY_MEDIUM < INTENSITY_STRONG);
    assert!(INTENSITY_STRONG <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_ceiling_stays_translucent() {
    let fresh_max = BEAM_OPACITY_MIN + BEAM_OPACITY_SPAN;
    let reset_max = BEAM_RESET_OPACITY_MIN + BEAM_RESET_OPACITY_SPAN;
    assert!(fresh_max < 0.5 && reset_max < 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbits_are_concentric_and_counter_rotating() {
    assert!(ORBIT_OUTER_RADIUS > ORBIT_INNER_RADIUS);
    assert!(ORBIT_INNER_SPEED * ORBIT_OUTER_SPEED < 0.0);
    assert!(ORBIT_HOVER_Z_INDEX > ORBIT_Z_INDEX);
    assert!(ORBIT_HOVER_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_and_tilt_defaults_are_sane() {
    assert!(GLOW_INACTIVE_ZONE > 0.0 && GLOW_INACTIVE_ZONE <= 1.0);
    assert!(GLOW_MOVEMENT_DURATION_SEC > 0.0);
    assert!(GLOW_EASE[0] >= 0.0 && GLOW_EASE[0] <= 1.0);
    assert!(GLOW_EASE[2] >= 0.0 && GLOW_EASE[2] <= 1.0);
    assert!(TILT_ACTIVE_SCALE > 1.0);
    assert!(MAX_FRAME_DELTA_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beam_cap_admits_the_default_population() {
    assert!(MINIMUM_BEAMS <= MINIMUM_BEAMS_CAP);
    assert!(RESUME_FLIGHT_SPAN > 0.0);
    assert!(TIMELINE_ANCHOR_FRACTION > 0.0 && TIMELINE_ANCHOR_FRACTION < 1.0);
}
