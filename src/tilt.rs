use crate::core::TiltPose;
use crate::dom;
use crate::events::pointer::client_point;
use crate::events::{HostEvent, Subscription};
use crate::Effect;
use anyhow::anyhow;
use web_sys as web;

fn apply(motion: &web::HtmlElement, glare: &web::HtmlElement, pose: &TiltPose) {
    dom::set_style(motion, "transition", pose.transition_css());
    dom::set_style(motion, "transform", &pose.transform_css());
    dom::set_style(motion, "box-shadow", pose.shadow_css());
    dom::set_style(glare, "background", &pose.glare_css());
}

/// Card that tilts toward the pointer with a moving glare highlight.
pub struct CometCard {
    subscriptions: Vec<Subscription>,
}

impl CometCard {
    pub fn attach(container_id: &str, motion_id: &str, glare_id: &str) -> anyhow::Result<Self> {
        let (_, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let container = dom::html_element_by_id(&document, container_id)?;
        let motion = dom::html_element_by_id(&document, motion_id)?;
        let glare = dom::html_element_by_id(&document, glare_id)?;

        let (m, g, c) = (motion.clone(), glare.clone(), container.clone());
        let on_move = Subscription::listen(&container, HostEvent::PointerMove, move |ev: web::PointerEvent| {
            let pose = TiltPose::for_pointer(&dom::rect_of(&c), client_point(&ev));
            apply(&m, &g, &pose);
        })?;
        let on_leave = Subscription::listen(&container, HostEvent::PointerLeave, move |_: web::Event| {
            apply(&motion, &glare, &TiltPose::neutral());
        })?;

        log::info!("[tilt] mounted on #{}", container_id);
        Ok(Self {
            subscriptions: vec![on_move, on_leave],
        })
    }
}

impl Effect for CometCard {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        log::info!("[tilt] torn down");
    }
}
