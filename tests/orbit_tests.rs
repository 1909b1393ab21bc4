// Host-side tests for orbit motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use crate::core::orbit::*;
use std::f64::consts::{PI, TAU};

fn wrap(a: f64) -> f64 {
    a.rem_euclid(TAU)
}

fn angles(engine: &OrbitEngine) -> Vec<f64> {
    (0..engine.items().len())
        .map(|i| engine.angle_of(i).unwrap())
        .collect()
}

#[test]
fn default_catalog_has_two_counter_rotating_orbits() {
    let items = default_catalog();
    assert_eq!(items.len(), 7);
    let inner: Vec<_> = items.iter().filter(|i| i.orbit_radius == 100.0).collect();
    let outer: Vec<_> = items.iter().filter(|i| i.orbit_radius == 180.0).collect();
    assert_eq!(inner.len(), 3);
    assert_eq!(outer.len(), 4);
    assert!(inner.iter().all(|i| i.speed > 0.0 && i.glow_color == GlowColor::Cyan));
    assert!(outer.iter().all(|i| i.speed < 0.0 && i.glow_color == GlowColor::Purple));
    assert_eq!(items[5].label, "Hugging Face");
    assert!((items[2].phase_shift - 4.0 * PI / 3.0).abs() < 1e-12);
}

#[test]
fn angular_position_is_periodic() {
    for item in default_catalog() {
        let period = TAU / item.speed.abs();
        for t in [0.0, 0.37, 5.0, 123.4] {
            let a = wrap(item.angle_at(t));
            let b = wrap(item.angle_at(t + period));
            let d = (a - b).abs();
            assert!(d < 1e-9 || (TAU - d) < 1e-9, "{} at t={t}", item.id);
        }
    }
}

#[test]
fn offsets_project_around_centre_compensating_for_size() {
    let item = OrbitItem::new("x", 100.0, 40.0, 1.0, 0.0, GlowColor::Cyan, "X");
    let at0 = item.offset_at(0.0);
    assert!((at0.x - (100.0 - 20.0)).abs() < 1e-9);
    assert!((at0.y - (-20.0)).abs() < 1e-9);
    let quarter = item.offset_at(PI / 2.0);
    assert!((quarter.x - (-20.0)).abs() < 1e-9);
    assert!((quarter.y - 80.0).abs() < 1e-9);
}

#[test]
fn pause_freezes_angles_and_resume_continues() {
    let mut engine = OrbitEngine::new(default_catalog());
    engine.advance(1.25);
    let before = angles(&engine);

    engine.set_paused(true);
    for _ in 0..120 {
        engine.advance(1.0 / 60.0);
        assert_eq!(angles(&engine), before);
    }

    engine.set_paused(false);
    engine.advance(0.5);
    assert!((engine.elapsed() - 1.75).abs() < 1e-12);
    for (i, item) in engine.items().iter().enumerate() {
        let expected = before[i] + 0.5 * item.speed;
        assert!((engine.angle_of(i).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn non_positive_deltas_do_not_move_the_clock() {
    let mut engine = OrbitEngine::new(default_catalog());
    engine.advance(2.0);
    engine.advance(0.0);
    engine.advance(-3.0);
    assert_eq!(engine.elapsed(), 2.0);
}

#[test]
fn hover_is_local_to_one_item() {
    let mut engine = OrbitEngine::new(default_catalog());
    engine.advance(3.0);
    let before = angles(&engine);
    assert!(engine.set_hovered("pinecone", true));
    assert!(!engine.set_hovered("cobol", true));

    let idx = engine.items().iter().position(|i| i.id == "pinecone").unwrap();
    let pose = engine.pose_of(idx).unwrap();
    assert_eq!(pose.scale, 1.25);
    assert_eq!(pose.z_index, 20);
    assert!(pose.label_visible);

    let other = engine.pose_of(0).unwrap();
    assert_eq!(other.scale, 1.0);
    assert_eq!(other.z_index, 10);
    assert!(!other.label_visible);
    assert_eq!(angles(&engine), before, "hover must not touch orbit physics");

    engine.set_hovered("pinecone", false);
    assert!(!engine.is_hovered("pinecone"));
    assert_eq!(engine.poses().count(), 7);
}

#[test]
fn one_path_per_orbit_with_staggered_delays() {
    let paths = orbit_paths(&default_catalog());
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].radius, 100.0);
    assert_eq!(paths[0].glow_color, GlowColor::Cyan);
    assert_eq!(paths[0].animation_delay_sec, 0.0);
    assert_eq!(paths[1].radius, 180.0);
    assert_eq!(paths[1].glow_color, GlowColor::Purple);
    assert_eq!(paths[1].animation_delay_sec, 1.5);
}

#[test]
fn glow_colour_tags_round_trip() {
    for c in [GlowColor::Cyan, GlowColor::Purple] {
        assert_eq!(GlowColor::from_tag(c.tag()), Some(c));
    }
    assert_eq!(GlowColor::from_tag("magenta"), None);
}

#[test]
fn advance_reports_whether_anything_moved() {
    let mut engine = OrbitEngine::new(default_catalog());
    assert!(engine.advance(1.0 / 60.0));
    assert!(!engine.advance(0.0));
    engine.set_paused(true);
    let frozen = engine.elapsed();
    for _ in 0..60 {
        assert!(!engine.advance(1.0 / 60.0), "paused frames must not restyle");
    }
    assert_eq!(engine.elapsed(), frozen);
    engine.set_paused(false);
    assert!(engine.advance(1.0 / 60.0));
}
