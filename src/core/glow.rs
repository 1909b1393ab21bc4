use crate::constants::*;
use crate::core::clock::{FrameScheduler, FrameSlot};
use crate::core::ease::{AngleTween, CubicBezier};
use crate::core::geometry::Rect;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowOptions {
    pub blur: f64,
    /// Fraction of half the element's smaller side inside which the pointer
    /// is ignored.
    pub inactive_zone: f64,
    /// Pixel margin added around the element for the activity hit test.
    pub proximity: f64,
    pub spread: f64,
    pub movement_duration_sec: f64,
    pub border_width: f64,
    /// A disabled glow attaches no listeners at all.
    pub disabled: bool,
}

impl Default for GlowOptions {
    fn default() -> Self {
        Self {
            blur: GLOW_BLUR,
            inactive_zone: GLOW_INACTIVE_ZONE,
            proximity: GLOW_PROXIMITY,
            spread: GLOW_SPREAD,
            movement_duration_sec: GLOW_MOVEMENT_DURATION_SEC,
            border_width: GLOW_BORDER_WIDTH,
            disabled: true,
        }
    }
}

/// Degrees, with 0 pointing up and increasing clockwise.
#[inline]
pub fn target_angle(center: DVec2, pointer: DVec2) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees() + GLOW_ANGLE_OFFSET_DEG
}

/// Signed difference `to - from` wrapped into (-180, 180].
#[inline]
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    let d = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    if d <= -180.0 {
        d + 360.0
    } else {
        d
    }
}

#[inline]
pub fn in_inactive_zone(rect: &Rect, pointer: DVec2, inactive_zone: f64) -> bool {
    let radius = 0.5 * rect.min_dimension() * inactive_zone;
    pointer.distance(rect.center()) < radius
}

#[inline]
pub fn is_active(rect: &Rect, pointer: DVec2, options: &GlowOptions) -> bool {
    !in_inactive_zone(rect, pointer, options.inactive_zone)
        && rect.contains_expanded(pointer, options.proximity)
}

/// Style values produced by one evaluation. `--active` is always written;
/// `--start` only changes through the tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPatch {
    pub active: bool,
    pub target_deg: Option<f64>,
}

/// Per-element glow state: last pointer, smoothed angle, pending frames.
#[derive(Clone, Debug)]
pub struct GlowTracker {
    options: GlowOptions,
    curve: CubicBezier,
    last_pointer: DVec2,
    current_angle: f64,
    active: bool,
    eval_slot: FrameSlot,
    tween_slot: FrameSlot,
    tween: Option<AngleTween>,
}

impl GlowTracker {
    pub fn new(options: GlowOptions) -> Self {
        Self {
            options,
            curve: CubicBezier::from_points(GLOW_EASE),
            last_pointer: DVec2::ZERO,
            current_angle: 0.0,
            active: false,
            eval_slot: FrameSlot::default(),
            tween_slot: FrameSlot::default(),
            tween: None,
        }
    }

    pub fn options(&self) -> &GlowOptions {
        &self.options
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_pointer(&self) -> DVec2 {
        self.last_pointer
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn has_pending_evaluation(&self) -> bool {
        self.eval_slot.is_pending()
    }

    /// Queue a re-evaluation on the next frame. `None` (scroll, synthetic
    /// triggers) re-uses the last known pointer. Replaces any queued one.
    pub fn schedule<S: FrameScheduler + ?Sized>(&mut self, pointer: Option<DVec2>, scheduler: &mut S) {
        if let Some(p) = pointer {
            self.last_pointer = p;
        }
        self.eval_slot.request(scheduler);
    }

    /// Run the queued evaluation against the element's current box.
    /// Starts a fresh tween (replacing any in flight) when active.
    pub fn evaluate<S: FrameScheduler + ?Sized>(&mut self, rect: Rect, tween_scheduler: &mut S) -> GlowPatch {
        self.eval_slot.fired();
        let pointer = self.last_pointer;
        self.active = is_active(&rect, pointer, &self.options);
        if !self.active {
            return GlowPatch {
                active: false,
                target_deg: None,
            };
        }
        let target = target_angle(rect.center(), pointer);
        let next = self.current_angle + shortest_angle_delta(self.current_angle, target);
        self.tween = Some(AngleTween::new(
            self.current_angle,
            next,
            self.options.movement_duration_sec,
            self.curve,
        ));
        self.tween_slot.request(tween_scheduler);
        GlowPatch {
            active: true,
            target_deg: Some(next),
        }
    }

    /// Advance the in-flight tween; returns the angle to write, if any.
    pub fn advance_tween<S: FrameScheduler + ?Sized>(&mut self, ts_ms: f64, scheduler: &mut S) -> Option<f64> {
        self.tween_slot.fired();
        let tween = self.tween.as_mut()?;
        let (value, done) = tween.sample(ts_ms);
        self.current_angle = value;
        if done {
            self.tween = None;
        } else {
            self.tween_slot.request(scheduler);
        }
        Some(value)
    }

    /// Cancel every outstanding frame and drop the tween.
    pub fn teardown<E, T>(&mut self, eval_scheduler: &mut E, tween_scheduler: &mut T)
    where
        E: FrameScheduler + ?Sized,
        T: FrameScheduler + ?Sized,
    {
        self.eval_slot.cancel(eval_scheduler);
        self.tween_slot.cancel(tween_scheduler);
        self.tween = None;
    }
}
