use crate::constants::*;
use crate::core::geometry::Rect;
use glam::DVec2;

/// Percentage of the timeline above the viewport's anchor line, in [0, 100].
/// A collapsed timeline reports 0.
pub fn timeline_progress(viewport_height: f64, timeline: &Rect) -> f64 {
    if timeline.height <= 0.0 {
        return 0.0;
    }
    let anchor = viewport_height * TIMELINE_ANCHOR_FRACTION;
    let pct = (anchor - timeline.top) / timeline.height * 100.0;
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

pub fn timeline_progress_css(pct: f64) -> String {
    format!("{}%", pct)
}

#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear flight progress in [0, 1]: the button lands once the page has
/// scrolled past `RESUME_FLIGHT_SPAN` of the hero.
pub fn flight_progress(scroll_y: f64, hero_height: f64) -> f64 {
    let span = hero_height * RESUME_FLIGHT_SPAN;
    if span <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    let p = scroll_y / span;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Inputs for one placement of the floating resume button, all in client
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResumeFlight {
    /// Box the button starts in, anchored to its bottom-right corner.
    pub start: Rect,
    /// Placeholder the button lands on. Zero width means it is hidden
    /// (narrow layouts) and the button stays at the start.
    pub end: Rect,
    pub button_size: DVec2,
}

impl ResumeFlight {
    pub fn start_point(&self) -> DVec2 {
        DVec2::new(
            self.start.right() - self.button_size.x - RESUME_INSET_PX,
            self.start.bottom() - self.button_size.y - RESUME_INSET_PX,
        )
    }

    /// Button translation for the given scroll position.
    pub fn position(&self, scroll_y: f64, hero_height: f64) -> DVec2 {
        let from = self.start_point();
        if self.end.width == 0.0 {
            return from;
        }
        let to = DVec2::new(self.end.left, self.end.top);
        let t = ease_in_out_cubic(flight_progress(scroll_y, hero_height));
        from + (to - from) * t
    }
}

pub fn translate_css(p: DVec2) -> String {
    format!("translate({}px, {}px)", p.x, p.y)
}
