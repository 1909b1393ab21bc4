use crate::core::{GlowOptions, GlowTracker};
use crate::dom;
use crate::events::pointer::client_point;
use crate::events::{HostEvent, Subscription};
use crate::frame::RafScheduler;
use crate::Effect;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct GlowState {
    tracker: GlowTracker,
    element: web::HtmlElement,
}

fn init_style_vars(el: &web::HtmlElement, opts: &GlowOptions) {
    dom::set_style(el, "--blur", &format!("{}px", opts.blur));
    dom::set_style(el, "--spread", &opts.spread.to_string());
    dom::set_style(el, "--start", "0");
    dom::set_style(el, "--active", "0");
    dom::set_style(
        el,
        "--glowingeffect-border-width",
        &format!("{}px", opts.border_width),
    );
}

/// Conic border glow that turns toward the pointer.
pub struct GlowingEffect {
    state: Option<Rc<RefCell<GlowState>>>,
    eval_raf: Option<RafScheduler>,
    tween_raf: Option<RafScheduler>,
    subscriptions: Vec<Subscription>,
}

impl GlowingEffect {
    pub fn attach(element_id: &str, options: GlowOptions) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let element = dom::html_element_by_id(&document, element_id)?;
        init_style_vars(&element, &options);
        if options.disabled {
            log::info!("[glow] #{} disabled, no listeners attached", element_id);
            return Ok(Self {
                state: None,
                eval_raf: None,
                tween_raf: None,
                subscriptions: Vec::new(),
            });
        }
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;

        let state = Rc::new(RefCell::new(GlowState {
            tracker: GlowTracker::new(options),
            element,
        }));
        let eval_raf = RafScheduler::new(window.clone());
        let tween_raf = RafScheduler::new(window.clone());

        {
            let state = state.clone();
            let mut tween = tween_raf.clone();
            eval_raf.set_callback(move |_ts| {
                let mut st = state.borrow_mut();
                let rect = dom::rect_of(&st.element);
                let patch = st.tracker.evaluate(rect, &mut tween);
                dom::set_style(&st.element, "--active", if patch.active { "1" } else { "0" });
            });
        }
        {
            let state = state.clone();
            let mut tween = tween_raf.clone();
            tween_raf.set_callback(move |ts| {
                let mut st = state.borrow_mut();
                if let Some(angle) = st.tracker.advance_tween(ts, &mut tween) {
                    dom::set_style(&st.element, "--start", &angle.to_string());
                }
            });
        }

        let mut subscriptions = Vec::new();
        let st = state.clone();
        let mut raf = eval_raf.clone();
        subscriptions.push(Subscription::listen(&window, HostEvent::Scroll, move |_: web::Event| {
            st.borrow_mut().tracker.schedule(None, &mut raf);
        })?);
        let st = state.clone();
        let mut raf = eval_raf.clone();
        subscriptions.push(Subscription::listen(&body, HostEvent::PointerMove, move |ev: web::PointerEvent| {
            st.borrow_mut().tracker.schedule(Some(client_point(&ev)), &mut raf);
        })?);

        log::info!("[glow] mounted on #{} {:?}", element_id, options);
        Ok(Self {
            state: Some(state),
            eval_raf: Some(eval_raf),
            tween_raf: Some(tween_raf),
            subscriptions,
        })
    }
}

impl Effect for GlowingEffect {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        if let (Some(state), Some(mut eval_raf), Some(mut tween_raf)) =
            (self.state.take(), self.eval_raf.take(), self.tween_raf.take())
        {
            state.borrow_mut().tracker.teardown(&mut eval_raf, &mut tween_raf);
            eval_raf.clear();
            tween_raf.clear();
        }
        log::info!("[glow] torn down");
    }
}
