use crate::constants::*;
use crate::core::geometry::Rect;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltTransition {
    /// Short linear follow while the pointer is over the card.
    Tracking,
    /// Slow ease back to rest after the pointer leaves.
    Settling,
}

/// 3D card pose derived directly from the pointer, no smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_x_px: f64,
    pub translate_y_px: f64,
    pub scale: f64,
    pub translate_z_px: f64,
    /// Glare centre in percent of the card box, `None` when removed.
    pub glare_pct: Option<DVec2>,
    pub transition: TiltTransition,
}

impl TiltPose {
    pub fn neutral() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            translate_x_px: 0.0,
            translate_y_px: 0.0,
            scale: 1.0,
            translate_z_px: 0.0,
            glare_pct: None,
            transition: TiltTransition::Settling,
        }
    }

    pub fn for_pointer(rect: &Rect, pointer: DVec2) -> Self {
        let f = rect.normalized_offset(pointer);
        Self {
            rotate_x_deg: -f.y * TILT_ROTATE_DEPTH_DEG,
            rotate_y_deg: f.x * TILT_ROTATE_DEPTH_DEG,
            translate_x_px: f.x * TILT_TRANSLATE_DEPTH_PX,
            translate_y_px: -f.y * TILT_TRANSLATE_DEPTH_PX,
            scale: TILT_ACTIVE_SCALE,
            translate_z_px: TILT_ACTIVE_LIFT_PX,
            glare_pct: Some(DVec2::new(
                f.x * TILT_GLARE_SPAN_PCT + 50.0,
                f.y * TILT_GLARE_SPAN_PCT + 50.0,
            )),
            transition: TiltTransition::Tracking,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateX({}px) translateY({}px) scale({}) translateZ({}px)",
            self.rotate_x_deg,
            self.rotate_y_deg,
            self.translate_x_px,
            self.translate_y_px,
            self.scale,
            self.translate_z_px
        )
    }

    pub fn transition_css(&self) -> &'static str {
        match self.transition {
            TiltTransition::Tracking => TILT_TRACKING_TRANSITION,
            TiltTransition::Settling => TILT_SETTLING_TRANSITION,
        }
    }

    pub fn shadow_css(&self) -> &'static str {
        match self.transition {
            TiltTransition::Tracking => TILT_SHADOW,
            TiltTransition::Settling => "none",
        }
    }

    pub fn glare_css(&self) -> String {
        match self.glare_pct {
            Some(g) => format!(
                "radial-gradient(circle at {}% {}%, rgba(255, 255, 255, 0.9) 10%, rgba(255, 255, 255, 0.75) 20%, rgba(255, 255, 255, 0) 80%)",
                g.x, g.y
            ),
            None => "none".to_string(),
        }
    }
}
