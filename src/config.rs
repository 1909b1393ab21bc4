//! Runtime options passed from JS as plain objects.
//!
//! Every key is optional; missing or mistyped values keep their defaults.
use crate::constants::MINIMUM_BEAMS_CAP;
use crate::core::{default_catalog, BeamOptions, GlowColor, GlowOptions, OrbitItem, ParseIntensityError};
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Intensity(#[from] ParseIntensityError),
    #[error("orbit item {index}: missing or invalid `{field}`")]
    ItemField { index: usize, field: &'static str },
    #[error("orbit item {index}: unknown glow colour {tag:?}")]
    GlowColor { index: usize, tag: String },
    #[error("`items` must be an array")]
    ItemsNotArray,
}

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    if !obj.is_object() {
        return None;
    }
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn get_f64(obj: &JsValue, key: &str) -> Option<f64> {
    get(obj, key).and_then(|v| v.as_f64()).filter(|v| v.is_finite())
}

fn get_bool(obj: &JsValue, key: &str) -> Option<bool> {
    get(obj, key).and_then(|v| v.as_bool())
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    get(obj, key).and_then(|v| v.as_string())
}

pub fn beam_options(js: &JsValue) -> BeamOptions {
    let mut opts = BeamOptions::default();
    if let Some(n) = get_f64(js, "minimumBeams") {
        if n > MINIMUM_BEAMS_CAP as f64 {
            log::warn!("[config] minimumBeams {} capped at {}", n, MINIMUM_BEAMS_CAP);
        }
        opts.minimum_beams = n.clamp(0.0, MINIMUM_BEAMS_CAP as f64) as usize;
    }
    if let Some(name) = get_string(js, "intensity") {
        match name.parse() {
            Ok(i) => opts.intensity = i,
            Err(e) => log::warn!("[config] {}", ConfigError::from(e)),
        }
    }
    opts
}

pub fn glow_options(js: &JsValue) -> GlowOptions {
    let mut opts = GlowOptions::default();
    if let Some(v) = get_f64(js, "blur") {
        opts.blur = v;
    }
    if let Some(v) = get_f64(js, "inactiveZone") {
        opts.inactive_zone = v;
    }
    if let Some(v) = get_f64(js, "proximity") {
        opts.proximity = v;
    }
    if let Some(v) = get_f64(js, "spread") {
        opts.spread = v;
    }
    if let Some(v) = get_f64(js, "movementDuration") {
        opts.movement_duration_sec = v.max(0.0);
    }
    if let Some(v) = get_f64(js, "borderWidth") {
        opts.border_width = v;
    }
    if let Some(v) = get_bool(js, "disabled") {
        opts.disabled = v;
    }
    opts
}

fn orbit_item(index: usize, js: &JsValue) -> Result<OrbitItem, ConfigError> {
    let field = |field: &'static str| ConfigError::ItemField { index, field };
    let id = get_string(js, "id").ok_or_else(|| field("id"))?;
    let orbit_radius = get_f64(js, "orbitRadius").ok_or_else(|| field("orbitRadius"))?;
    let size = get_f64(js, "size")
        .filter(|s| *s >= 0.0)
        .ok_or_else(|| field("size"))?;
    let speed = get_f64(js, "speed").ok_or_else(|| field("speed"))?;
    let phase_shift = get_f64(js, "phaseShift").unwrap_or(0.0);
    let tag = get_string(js, "glowColor").unwrap_or_else(|| "cyan".to_string());
    let glow_color = GlowColor::from_tag(&tag).ok_or(ConfigError::GlowColor { index, tag })?;
    let label = get_string(js, "label").unwrap_or_else(|| id.clone());
    Ok(OrbitItem {
        id,
        orbit_radius,
        size,
        speed,
        phase_shift,
        glow_color,
        label,
    })
}

fn try_orbit_catalog(js: &JsValue) -> Result<Option<Vec<OrbitItem>>, ConfigError> {
    let Some(items) = get(js, "items") else {
        return Ok(None);
    };
    let items = items
        .dyn_into::<Array>()
        .map_err(|_| ConfigError::ItemsNotArray)?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| orbit_item(i, &v))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// The configured catalog, or the built-in one when absent or invalid.
pub fn orbit_catalog(js: &JsValue) -> Vec<OrbitItem> {
    match try_orbit_catalog(js) {
        Ok(Some(items)) => items,
        Ok(None) => default_catalog(),
        Err(e) => {
            log::warn!("[config] {}; using default orbit catalog", e);
            default_catalog()
        }
    }
}
