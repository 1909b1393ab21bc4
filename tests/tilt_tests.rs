// Host-side tests for the tilt card pose.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
}

use crate::core::geometry::Rect;
use crate::core::tilt::*;
use glam::DVec2;

fn card() -> Rect {
    Rect::new(100.0, 50.0, 320.0, 400.0)
}

#[test]
fn centre_pointer_only_lifts_the_card() {
    let pose = TiltPose::for_pointer(&card(), card().center());
    assert_eq!(pose.rotate_x_deg.abs(), 0.0);
    assert_eq!(pose.rotate_y_deg.abs(), 0.0);
    assert_eq!(pose.scale, 1.05);
    assert_eq!(pose.translate_z_px, 50.0);
    assert_eq!(pose.glare_pct, Some(DVec2::new(50.0, 50.0)));
    assert_eq!(pose.transition, TiltTransition::Tracking);
}

#[test]
fn top_left_corner_tilts_toward_the_pointer() {
    let pose = TiltPose::for_pointer(&card(), DVec2::new(100.0, 50.0));
    assert!((pose.rotate_x_deg - 8.75).abs() < 1e-9);
    assert!((pose.rotate_y_deg + 8.75).abs() < 1e-9);
    assert!((pose.translate_x_px + 10.0).abs() < 1e-9);
    assert!((pose.translate_y_px - 10.0).abs() < 1e-9);
    let g = pose.glare_pct.unwrap();
    assert!((g.x - 25.0).abs() < 1e-9 && (g.y - 25.0).abs() < 1e-9);
}

#[test]
fn rotation_is_proportional_to_offset() {
    let r = card();
    let quarter_right = DVec2::new(r.left + r.width * 0.75, r.center().y);
    let pose = TiltPose::for_pointer(&r, quarter_right);
    assert!((pose.rotate_y_deg - 17.5 * 0.25).abs() < 1e-9);
    assert!(pose.rotate_x_deg.abs() < 1e-9);
}

#[test]
fn neutral_pose_clears_everything() {
    let pose = TiltPose::neutral();
    assert_eq!(
        pose.transform_css(),
        "rotateX(0deg) rotateY(0deg) translateX(0px) translateY(0px) scale(1) translateZ(0px)"
    );
    assert_eq!(pose.glare_css(), "none");
    assert_eq!(pose.shadow_css(), "none");
    assert_eq!(pose.transition_css(), "transform 0.5s ease-out, box-shadow 0.5s ease-out");
}

#[test]
fn tracking_pose_renders_glare_and_fast_transition() {
    let pose = TiltPose::for_pointer(&card(), card().center());
    assert!(pose
        .glare_css()
        .starts_with("radial-gradient(circle at 50% 50%,"));
    assert_eq!(pose.transition_css(), "transform 0.1s linear, box-shadow 0.1s linear");
    assert_ne!(pose.shadow_css(), "none");
}

#[test]
fn degenerate_card_does_not_produce_nan() {
    let flat = Rect::new(0.0, 0.0, 0.0, 0.0);
    let pose = TiltPose::for_pointer(&flat, DVec2::new(10.0, 10.0));
    assert!(pose.rotate_x_deg.is_finite() && pose.rotate_y_deg.is_finite());
}
