#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod beams;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod glow;
mod orbit;
mod scroll;
mod tilt;

/// Mounted decorative effect. Teardown cancels its frame loop and removes
/// every listener it registered; it runs at most once.
pub(crate) trait Effect {
    fn teardown(&mut self);
}

/// Handle returned to the host page by every `mount*` call.
///
/// A failed mount yields an inert handle so the host can call `teardown`
/// unconditionally on unmount.
#[wasm_bindgen]
pub struct EffectHandle {
    inner: Option<Box<dyn Effect>>,
}

impl EffectHandle {
    fn from_result<E: Effect + 'static>(what: &str, result: anyhow::Result<E>) -> Self {
        match result {
            Ok(effect) => Self {
                inner: Some(Box::new(effect)),
            },
            Err(e) => {
                log::warn!("[{}] not mounted: {:?}", what, e);
                Self { inner: None }
            }
        }
    }
}

#[wasm_bindgen]
impl EffectHandle {
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    pub fn teardown(&mut self) {
        if let Some(mut effect) = self.inner.take() {
            effect.teardown();
        }
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");
    Ok(())
}

/// Animate the beam background on `<canvas id=canvasId>`.
/// Options: `{ minimumBeams?: number, intensity?: "subtle" | "medium" | "strong" }`.
#[wasm_bindgen(js_name = mountBeams)]
pub fn mount_beams(canvas_id: &str, options: JsValue) -> EffectHandle {
    let opts = config::beam_options(&options);
    EffectHandle::from_result("beams", beams::BeamsBackground::attach(canvas_id, opts))
}

/// Orbit the skill catalog around the centre of `#containerId`.
/// Options: `{ items?: OrbitItem[] }`, defaulting to the built-in catalog.
#[wasm_bindgen(js_name = mountOrbit)]
pub fn mount_orbit(container_id: &str, options: JsValue) -> EffectHandle {
    let items = config::orbit_catalog(&options);
    EffectHandle::from_result("orbit", orbit::OrbitingSkills::attach(container_id, items))
}

#[wasm_bindgen(js_name = mountGlow)]
pub fn mount_glow(element_id: &str, options: JsValue) -> EffectHandle {
    let opts = config::glow_options(&options);
    EffectHandle::from_result("glow", glow::GlowingEffect::attach(element_id, opts))
}

#[wasm_bindgen(js_name = mountTilt)]
pub fn mount_tilt(container_id: &str, motion_id: &str, glare_id: &str) -> EffectHandle {
    EffectHandle::from_result(
        "tilt",
        tilt::CometCard::attach(container_id, motion_id, glare_id),
    )
}

/// Track scroll progress through `#timelineId` in its `--timeline-progress`
/// custom property.
#[wasm_bindgen(js_name = mountTimeline)]
pub fn mount_timeline(timeline_id: &str) -> EffectHandle {
    EffectHandle::from_result("timeline", scroll::TimelineProgress::attach(timeline_id))
}

/// Fly `#buttonId` from the bottom-right of `#startId` to `#placeholderId`
/// while `#heroId` scrolls out of view.
#[wasm_bindgen(js_name = mountResumeButton)]
pub fn mount_resume_button(button_id: &str, start_id: &str, placeholder_id: &str, hero_id: &str) -> EffectHandle {
    EffectHandle::from_result(
        "resume",
        scroll::ResumeButton::attach(scroll::ResumeAnchors {
            button: button_id,
            start: start_id,
            placeholder: placeholder_id,
            hero: hero_id,
        }),
    )
}
