//! Explicit event subscriptions.
//!
//! Every listener an effect installs is held in a [`Subscription`]; dropping
//! it removes the listener, so teardown is just dropping the effect's list.
pub mod pointer;

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    PointerMove,
    PointerEnter,
    PointerLeave,
    Scroll,
    Resize,
}

impl HostEvent {
    pub fn name(self) -> &'static str {
        match self {
            HostEvent::PointerMove => "pointermove",
            HostEvent::PointerEnter => "pointerenter",
            HostEvent::PointerLeave => "pointerleave",
            HostEvent::Scroll => "scroll",
            HostEvent::Resize => "resize",
        }
    }

    // Listeners that never call preventDefault are registered passive.
    fn passive(self) -> bool {
        matches!(
            self,
            HostEvent::PointerMove | HostEvent::Scroll | HostEvent::Resize
        )
    }
}

pub struct Subscription {
    target: web::EventTarget,
    event: HostEvent,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Subscription {
    /// Register `handler` for `event` on `target`. Events that fail to cast
    /// to `E` are ignored.
    pub fn listen<E, F>(target: &web::EventTarget, event: HostEvent, mut handler: F) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(event.passive());
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event.name(),
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow!("add {} listener: {:?}", event.name(), e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    pub fn event(&self) -> HostEvent {
        self.event
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event.name(),
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
