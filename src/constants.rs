/// Effect tuning constants.
///
/// These constants express intended behavior (ranges, thresholds, default
/// options) and keep magic numbers out of the effect code.
// Beam field population
pub const MINIMUM_BEAMS: usize = 20;
pub const BEAM_COUNT_SCALE: f64 = 1.5;
pub const MINIMUM_BEAMS_CAP: usize = 200; // upper bound for the `minimumBeams` option

// Fresh beam ranges (entity factory)
pub const BEAM_SPAWN_REGION_SCALE: f64 = 1.5;
pub const BEAM_SPAWN_REGION_OFFSET: f64 = 0.25;
pub const BEAM_WIDTH_MIN: f64 = 30.0;
pub const BEAM_WIDTH_SPAN: f64 = 60.0;
pub const BEAM_LENGTH_SCALE: f64 = 2.5; // relative to surface height
pub const BEAM_ANGLE_MIN_DEG: f64 = -35.0;
pub const BEAM_ANGLE_SPAN_DEG: f64 = 10.0;
pub const BEAM_SPEED_MIN: f64 = 0.6;
pub const BEAM_SPEED_SPAN: f64 = 1.2;
pub const BEAM_OPACITY_MIN: f64 = 0.12;
pub const BEAM_OPACITY_SPAN: f64 = 0.16;
pub const BEAM_HUE_MIN: f64 = 190.0;
pub const BEAM_HUE_SPAN: f64 = 70.0;
pub const BEAM_PULSE_SPEED_MIN: f64 = 0.02;
pub const BEAM_PULSE_SPEED_SPAN: f64 = 0.03;

// Recycled beam ranges
pub const BEAM_RECYCLE_MARGIN: f64 = 100.0; // px past the top edge / below the bottom edge
pub const BEAM_COLUMNS: usize = 3;
pub const BEAM_COLUMN_JITTER: f64 = 0.5; // fraction of column spacing
pub const BEAM_RESET_WIDTH_MIN: f64 = 100.0;
pub const BEAM_RESET_WIDTH_SPAN: f64 = 100.0;
pub const BEAM_RESET_SPEED_MIN: f64 = 0.5;
pub const BEAM_RESET_SPEED_SPAN: f64 = 0.4;
pub const BEAM_RESET_OPACITY_MIN: f64 = 0.2;
pub const BEAM_RESET_OPACITY_SPAN: f64 = 0.1;

// Beam painting
pub const BEAM_PULSE_BASE: f64 = 0.8;
pub const BEAM_PULSE_DEPTH: f64 = 0.2;
pub const BEAM_SATURATION_PCT: f64 = 85.0;
pub const BEAM_LIGHTNESS_PCT: f64 = 65.0;
pub const BEAM_BLUR_FILTER: &str = "blur(35px)";

// Intensity multipliers
pub const INTENSITY_SUBTLE: f64 = 0.7;
pub const INTENSITY_MEDIUM: f64 = 0.85;
pub const INTENSITY_STRONG: f64 = 1.0;

// Frame clock
pub const MAX_FRAME_DELTA_SEC: f64 = 1.0; // clamp for tab-switch clock jumps

// Orbit layout
pub const ORBIT_INNER_RADIUS: f64 = 100.0;
pub const ORBIT_OUTER_RADIUS: f64 = 180.0;
pub const ORBIT_INNER_SPEED: f64 = 1.0;
pub const ORBIT_OUTER_SPEED: f64 = -0.6;
pub const ORBIT_PATH_DELAY_STEP_SEC: f64 = 1.5;
pub const ORBIT_HOVER_SCALE: f64 = 1.25;
pub const ORBIT_Z_INDEX: i32 = 10;
pub const ORBIT_HOVER_Z_INDEX: i32 = 20;

// Glow defaults
pub const GLOW_BLUR: f64 = 0.0;
pub const GLOW_INACTIVE_ZONE: f64 = 0.7;
pub const GLOW_PROXIMITY: f64 = 0.0;
pub const GLOW_SPREAD: f64 = 20.0;
pub const GLOW_MOVEMENT_DURATION_SEC: f64 = 2.0;
pub const GLOW_BORDER_WIDTH: f64 = 1.0;
pub const GLOW_ANGLE_OFFSET_DEG: f64 = 90.0;
pub const GLOW_EASE: [f64; 4] = [0.16, 1.0, 0.3, 1.0]; // cubic-bezier control points

// Tilt card
pub const TILT_ROTATE_DEPTH_DEG: f64 = 17.5;
pub const TILT_TRANSLATE_DEPTH_PX: f64 = 20.0;
pub const TILT_ACTIVE_SCALE: f64 = 1.05;
pub const TILT_ACTIVE_LIFT_PX: f64 = 50.0;
pub const TILT_GLARE_SPAN_PCT: f64 = 50.0;
pub const TILT_TRACKING_TRANSITION: &str = "transform 0.1s linear, box-shadow 0.1s linear";
pub const TILT_SETTLING_TRANSITION: &str = "transform 0.5s ease-out, box-shadow 0.5s ease-out";
pub const TILT_SHADOW: &str = "rgba(0, 0, 0, 0.01) 0px 520px 146px 0px, rgba(0, 0, 0, 0.04) 0px 333px 133px 0px, rgba(0, 0, 0, 0.26) 0px 83px 83px 0px, rgba(0, 0, 0, 0.29) 0px 21px 46px 0px";

// Scroll-driven decorations
pub const TIMELINE_ANCHOR_FRACTION: f64 = 0.5; // viewport height fraction the progress line tracks
pub const RESUME_FLIGHT_SPAN: f64 = 0.8; // fraction of the hero height the button flies over
pub const RESUME_INSET_PX: f64 = 20.0;
