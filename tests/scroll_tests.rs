// Host-side tests for the scroll-driven timeline and resume button.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::geometry::Rect;
use crate::core::scroll::*;
use glam::DVec2;

#[test]
fn timeline_progress_follows_the_viewport_midline() {
    let vh = 800.0;
    assert!((timeline_progress(vh, &Rect::new(0.0, 200.0, 600.0, 1000.0)) - 20.0).abs() < 1e-9);
    assert_eq!(timeline_progress(vh, &Rect::new(0.0, 500.0, 600.0, 1000.0)), 0.0);
    assert_eq!(timeline_progress(vh, &Rect::new(0.0, -1000.0, 600.0, 1000.0)), 100.0);
    assert_eq!(timeline_progress_css(20.0), "20%");
}

#[test]
fn collapsed_timeline_reports_zero() {
    assert_eq!(timeline_progress(800.0, &Rect::new(0.0, 100.0, 600.0, 0.0)), 0.0);
    assert_eq!(timeline_progress(800.0, &Rect::new(0.0, 900.0, 600.0, 0.0)), 0.0);
}

#[test]
fn ease_in_out_cubic_is_symmetric() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        assert!((ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn flight_progress_spans_most_of_the_hero() {
    assert_eq!(flight_progress(0.0, 1000.0), 0.0);
    assert!((flight_progress(400.0, 1000.0) - 0.5).abs() < 1e-12);
    assert_eq!(flight_progress(1600.0, 1000.0), 1.0);
    assert_eq!(flight_progress(-50.0, 1000.0), 0.0);
    assert_eq!(flight_progress(10.0, 0.0), 1.0);
    assert_eq!(flight_progress(0.0, 0.0), 0.0);
}

fn flight(end_width: f64) -> ResumeFlight {
    ResumeFlight {
        start: Rect::new(0.0, 0.0, 1200.0, 800.0),
        end: Rect::new(600.0, 20.0, end_width, 40.0),
        button_size: DVec2::new(150.0, 40.0),
    }
}

#[test]
fn button_starts_inset_from_the_bottom_right_corner() {
    let f = flight(150.0);
    assert_eq!(f.start_point(), DVec2::new(1030.0, 740.0));
    assert_eq!(f.position(0.0, 1000.0), DVec2::new(1030.0, 740.0));
    assert_eq!(translate_css(f.start_point()), "translate(1030px, 740px)");
}

#[test]
fn button_lands_on_the_placeholder() {
    let f = flight(150.0);
    assert_eq!(f.position(800.0, 1000.0), DVec2::new(600.0, 20.0));
    assert_eq!(f.position(5000.0, 1000.0), DVec2::new(600.0, 20.0));
    let mid = f.position(400.0, 1000.0);
    assert!((mid - DVec2::new(815.0, 380.0)).length() < 1e-9);
}

#[test]
fn hidden_placeholder_keeps_the_button_at_the_start() {
    let f = flight(0.0);
    for scroll in [0.0, 400.0, 800.0, 5000.0] {
        assert_eq!(f.position(scroll, 1000.0), f.start_point());
    }
}
