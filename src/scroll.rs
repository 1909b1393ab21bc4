use crate::core::{timeline_progress, timeline_progress_css, translate_css, ResumeFlight};
use crate::dom;
use crate::events::{HostEvent, Subscription};
use crate::Effect;
use anyhow::anyhow;
use glam::DVec2;
use std::rc::Rc;
use web_sys as web;

/// Re-run `update` on every window scroll and resize, and once right away.
fn follow_viewport(window: &web::Window, update: Rc<dyn Fn()>) -> anyhow::Result<Vec<Subscription>> {
    let mut subscriptions = Vec::with_capacity(2);
    for event in [HostEvent::Scroll, HostEvent::Resize] {
        let update = update.clone();
        subscriptions.push(Subscription::listen(window, event, move |_: web::Event| update())?);
    }
    update();
    Ok(subscriptions)
}

/// Writes `--timeline-progress` on a timeline as the page scrolls past it.
pub struct TimelineProgress {
    subscriptions: Vec<Subscription>,
}

impl TimelineProgress {
    pub fn attach(timeline_id: &str) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let timeline = dom::html_element_by_id(&document, timeline_id)?;

        let win = window.clone();
        let subscriptions = follow_viewport(
            &window,
            Rc::new(move || {
                let (_, viewport_h) = dom::viewport_size(&win);
                let pct = timeline_progress(viewport_h, &dom::rect_of(&timeline));
                dom::set_style(&timeline, "--timeline-progress", &timeline_progress_css(pct));
            }),
        )?;
        log::info!("[timeline] mounted on #{}", timeline_id);
        Ok(Self { subscriptions })
    }
}

impl Effect for TimelineProgress {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        log::info!("[timeline] torn down");
    }
}

/// Element ids the floating resume button is positioned against.
pub struct ResumeAnchors<'a> {
    pub button: &'a str,
    pub start: &'a str,
    pub placeholder: &'a str,
    pub hero: &'a str,
}

/// Fixed-position button that flies from the hero into a placeholder as the
/// hero scrolls away.
pub struct ResumeButton {
    subscriptions: Vec<Subscription>,
}

impl ResumeButton {
    pub fn attach(ids: ResumeAnchors<'_>) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let button = dom::html_element_by_id(&document, ids.button)?;
        let start = dom::html_element_by_id(&document, ids.start)?;
        let placeholder = dom::html_element_by_id(&document, ids.placeholder)?;
        let hero = dom::html_element_by_id(&document, ids.hero)?;

        let win = window.clone();
        let subscriptions = follow_viewport(
            &window,
            Rc::new(move || {
                let flight = ResumeFlight {
                    start: dom::rect_of(&start),
                    end: dom::rect_of(&placeholder),
                    button_size: DVec2::new(button.offset_width() as f64, button.offset_height() as f64),
                };
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                let at = flight.position(scroll_y, hero.offset_height() as f64);
                dom::set_style(&button, "visibility", "visible");
                dom::set_style(&button, "transform", &translate_css(at));
            }),
        )?;
        log::info!("[resume] mounted on #{}", ids.button);
        Ok(Self { subscriptions })
    }
}

impl Effect for ResumeButton {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        log::info!("[resume] torn down");
    }
}
