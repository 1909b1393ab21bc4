use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// A translucent rising light shaft. Surface-space (backing store pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
    pub angle_deg: f64,
    pub speed: f64,
    pub opacity: f64,
    pub hue: f64,
    pub pulse: f64,
    pub pulse_speed: f64,
}

/// Create one randomized beam for a `width` x `height` surface.
pub fn create_beam<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Beam {
    let spawn = |rng: &mut R, extent: f64| {
        rng.gen::<f64>() * extent * BEAM_SPAWN_REGION_SCALE - extent * BEAM_SPAWN_REGION_OFFSET
    };
    let x = spawn(rng, width);
    let y = spawn(rng, height);
    Beam {
        x,
        y,
        width: BEAM_WIDTH_MIN + rng.gen::<f64>() * BEAM_WIDTH_SPAN,
        length: height * BEAM_LENGTH_SCALE,
        angle_deg: BEAM_ANGLE_MIN_DEG + rng.gen::<f64>() * BEAM_ANGLE_SPAN_DEG,
        speed: BEAM_SPEED_MIN + rng.gen::<f64>() * BEAM_SPEED_SPAN,
        opacity: BEAM_OPACITY_MIN + rng.gen::<f64>() * BEAM_OPACITY_SPAN,
        hue: BEAM_HUE_MIN + rng.gen::<f64>() * BEAM_HUE_SPAN,
        pulse: rng.gen::<f64>() * TAU,
        pulse_speed: BEAM_PULSE_SPEED_MIN + rng.gen::<f64>() * BEAM_PULSE_SPEED_SPAN,
    }
}

/// Re-enter `beam` from below the field in column `index % 3`.
///
/// Hue follows the array slot, so a slot keeps its colour across recycles.
pub fn reset_beam<R: Rng + ?Sized>(
    rng: &mut R,
    beam: &mut Beam,
    index: usize,
    total: usize,
    width: f64,
    height: f64,
) {
    let column = (index % BEAM_COLUMNS) as f64;
    let spacing = width / BEAM_COLUMNS as f64;
    beam.y = height + BEAM_RECYCLE_MARGIN;
    beam.x = column * spacing
        + spacing / 2.0
        + (rng.gen::<f64>() - 0.5) * spacing * BEAM_COLUMN_JITTER;
    beam.width = BEAM_RESET_WIDTH_MIN + rng.gen::<f64>() * BEAM_RESET_WIDTH_SPAN;
    beam.speed = BEAM_RESET_SPEED_MIN + rng.gen::<f64>() * BEAM_RESET_SPEED_SPAN;
    beam.hue = BEAM_HUE_MIN + (index as f64 * BEAM_HUE_SPAN) / total.max(1) as f64;
    beam.opacity = BEAM_RESET_OPACITY_MIN + rng.gen::<f64>() * BEAM_RESET_OPACITY_SPAN;
}

#[inline]
pub fn has_left_field(beam: &Beam) -> bool {
    beam.y + beam.length < -BEAM_RECYCLE_MARGIN
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Intensity {
    Subtle,
    Medium,
    #[default]
    Strong,
}

impl Intensity {
    pub fn opacity_multiplier(self) -> f64 {
        match self {
            Intensity::Subtle => INTENSITY_SUBTLE,
            Intensity::Medium => INTENSITY_MEDIUM,
            Intensity::Strong => INTENSITY_STRONG,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown beam intensity {0:?} (expected subtle, medium or strong)")]
pub struct ParseIntensityError(pub String);

impl FromStr for Intensity {
    type Err = ParseIntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subtle" => Ok(Intensity::Subtle),
            "medium" => Ok(Intensity::Medium),
            "strong" => Ok(Intensity::Strong),
            _ => Err(ParseIntensityError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamOptions {
    pub minimum_beams: usize,
    pub intensity: Intensity,
}

impl Default for BeamOptions {
    fn default() -> Self {
        Self {
            minimum_beams: MINIMUM_BEAMS,
            intensity: Intensity::default(),
        }
    }
}

impl BeamOptions {
    /// Population after scaling; `minimum_beams` is capped at
    /// [`MINIMUM_BEAMS_CAP`].
    pub fn beam_count(&self) -> usize {
        (self.minimum_beams.min(MINIMUM_BEAMS_CAP) as f64 * BEAM_COUNT_SCALE).floor() as usize
    }
}

/// One colour stop of a beam's length-wise gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, BEAM_SATURATION_PCT, BEAM_LIGHTNESS_PCT, self.alpha
        )
    }
}

/// Everything the surface needs to draw one beam.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamPaint {
    pub x: f64,
    pub y: f64,
    pub rotation_rad: f64,
    pub width: f64,
    pub length: f64,
    pub stops: SmallVec<[GradientStop; 6]>,
}

/// Shimmering opacity of a beam under the given intensity.
#[inline]
pub fn pulsing_opacity(beam: &Beam, intensity: Intensity) -> f64 {
    beam.opacity * (BEAM_PULSE_BASE + beam.pulse.sin() * BEAM_PULSE_DEPTH) * intensity.opacity_multiplier()
}

pub fn paint_beam(beam: &Beam, intensity: Intensity) -> BeamPaint {
    let p = pulsing_opacity(beam, intensity);
    let stop = |offset: f64, alpha: f64| GradientStop {
        offset,
        hue: beam.hue,
        alpha,
    };
    let stops = SmallVec::from_buf([
        stop(0.0, 0.0),
        stop(0.1, p * 0.5),
        stop(0.4, p),
        stop(0.6, p),
        stop(0.9, p * 0.5),
        stop(1.0, 0.0),
    ]);
    BeamPaint {
        x: beam.x,
        y: beam.y,
        rotation_rad: beam.angle_deg.to_radians(),
        width: beam.width,
        length: beam.length,
        stops,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    Uninitialized,
    Sized,
    Animating,
}

/// Fixed-size, self-recycling beam collection.
#[derive(Clone, Debug)]
pub struct BeamField {
    options: BeamOptions,
    beams: Vec<Beam>,
    width: f64,
    height: f64,
    phase: FieldPhase,
}

impl BeamField {
    pub fn new(options: BeamOptions) -> Self {
        Self {
            options,
            beams: Vec::new(),
            width: 0.0,
            height: 0.0,
            phase: FieldPhase::Uninitialized,
        }
    }

    /// Adopt a new surface size. Destructive: every beam is regenerated.
    pub fn resize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = self.options.beam_count();
        self.beams = (0..count)
            .map(|_| create_beam(rng, self.width, self.height))
            .collect();
        self.phase = FieldPhase::Sized;
    }

    /// Advance every beam by one frame, recycling the ones that left the
    /// field. Returns how many were recycled. No-op before the first resize.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.phase == FieldPhase::Uninitialized {
            return 0;
        }
        self.phase = FieldPhase::Animating;
        let total = self.beams.len();
        let (w, h) = (self.width, self.height);
        let mut recycled = 0;
        for (index, beam) in self.beams.iter_mut().enumerate() {
            beam.y -= beam.speed;
            beam.pulse += beam.pulse_speed;
            if has_left_field(beam) {
                reset_beam(rng, beam, index, total, w, h);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn paints(&self) -> impl Iterator<Item = BeamPaint> + '_ {
        let intensity = self.options.intensity;
        self.beams.iter().map(move |b| paint_beam(b, intensity))
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn beams_mut(&mut self) -> &mut [Beam] {
        &mut self.beams
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    pub fn options(&self) -> &BeamOptions {
        &self.options
    }
}
