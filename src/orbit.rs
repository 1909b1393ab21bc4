use crate::constants::{ORBIT_HOVER_SCALE, ORBIT_Z_INDEX};
use crate::core::{FrameClock, ItemPose, OrbitEngine, OrbitItem};
use crate::dom;
use crate::events::{HostEvent, Subscription};
use crate::frame::RafScheduler;
use crate::Effect;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Host markup: items carry `data-orbit-id`, an optional `[data-orbit-label]`
/// child, and rings carry `data-orbit-path` in orbit order.
struct OrbitState {
    engine: OrbitEngine,
    clock: FrameClock,
    // Parallel to `engine.items()`; `None` when the host has no element for the id.
    elements: Vec<Option<OrbitNode>>,
}

/// An item's element and its label children, looked up once on attach.
struct OrbitNode {
    root: web::HtmlElement,
    labels: Vec<web::HtmlElement>,
}

impl OrbitNode {
    fn new(root: web::HtmlElement) -> Self {
        let labels = dom::html_elements(&root, "[data-orbit-label]");
        Self { root, labels }
    }
}

impl OrbitState {
    fn apply_all(&self) {
        for (i, node) in self.elements.iter().enumerate() {
            if let (Some(node), Some(pose)) = (node, self.engine.pose_of(i)) {
                apply_pose(node, &self.engine.items()[i], &pose);
            }
        }
    }

    fn apply_one(&self, id: &str) {
        let Some(i) = self.engine.items().iter().position(|it| it.id == id) else {
            return;
        };
        if let (Some(Some(node)), Some(pose)) = (self.elements.get(i), self.engine.pose_of(i)) {
            apply_pose(node, &self.engine.items()[i], &pose);
        }
    }
}

fn apply_pose(node: &OrbitNode, item: &OrbitItem, pose: &ItemPose) {
    let el = &node.root;
    dom::set_style(
        el,
        "transform",
        &format!(
            "translate({}px, {}px) scale({})",
            pose.offset.x, pose.offset.y, pose.scale
        ),
    );
    dom::set_style(el, "z-index", &pose.z_index.to_string());
    let hovered = pose.label_visible;
    dom::set_style(
        el,
        "box-shadow",
        if hovered {
            item.glow_color.hover_shadow()
        } else {
            ""
        },
    );
    for label in &node.labels {
        dom::set_style(label, "display", if hovered { "" } else { "none" });
    }
}

fn init_item(node: &OrbitNode, item: &OrbitItem) {
    let el = &node.root;
    let size = format!("{}px", item.size);
    dom::set_style(el, "position", "absolute");
    dom::set_style(el, "top", "50%");
    dom::set_style(el, "left", "50%");
    dom::set_style(el, "width", &size);
    dom::set_style(el, "height", &size);
    dom::set_style(el, "z-index", &ORBIT_Z_INDEX.to_string());
    for label in &node.labels {
        label.set_text_content(Some(&item.label));
    }
}

/// Skills revolving around the centre of a container element.
pub struct OrbitingSkills {
    state: Rc<RefCell<OrbitState>>,
    raf: RafScheduler,
    subscriptions: Vec<Subscription>,
}

impl OrbitingSkills {
    pub fn attach(container_id: &str, items: Vec<OrbitItem>) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let container = dom::html_element_by_id(&document, container_id)?;

        let engine = OrbitEngine::new(items);
        let host_items = dom::html_elements(&container, "[data-orbit-id]");
        let elements: Vec<Option<OrbitNode>> = engine
            .items()
            .iter()
            .map(|item| {
                host_items
                    .iter()
                    .find(|el| el.get_attribute("data-orbit-id").as_deref() == Some(item.id.as_str()))
                    .cloned()
                    .map(OrbitNode::new)
            })
            .collect();
        for (item, el) in engine.items().iter().zip(&elements) {
            match el {
                Some(el) => init_item(el, item),
                None => log::warn!("[orbit] no element for item {:?}", item.id),
            }
        }
        let rings = dom::html_elements(&container, "[data-orbit-path]");
        for (path, ring) in engine.paths().iter().zip(&rings) {
            let (primary, secondary, border) = path.glow_color.ring_colors();
            let diameter = format!("{}px", path.radius * 2.0);
            dom::set_style(ring, "width", &diameter);
            dom::set_style(ring, "height", &diameter);
            dom::set_style(ring, "animation-delay", &format!("{}s", path.animation_delay_sec));
            dom::set_style(ring, "border", &format!("1px solid {}", border));
            dom::set_style(
                ring,
                "box-shadow",
                &format!("0 0 60px {}, inset 0 0 60px {}", primary, secondary),
            );
        }

        let state = Rc::new(RefCell::new(OrbitState {
            engine,
            clock: FrameClock::default(),
            elements,
        }));
        state.borrow().apply_all();

        let raf = RafScheduler::new(window);
        {
            let state = state.clone();
            let mut raf_tick = raf.clone();
            raf.set_callback(move |ts| {
                let mut st = state.borrow_mut();
                // Paused frames change nothing; hover restyles through `apply_one`.
                if let Some(dt) = st.clock.tick(ts, &mut raf_tick) {
                    if st.engine.advance(dt) {
                        st.apply_all();
                    }
                }
            });
        }

        let mut subscriptions = Vec::new();
        let st = state.clone();
        subscriptions.push(Subscription::listen(&container, HostEvent::PointerEnter, move |_: web::Event| {
            st.borrow_mut().engine.set_paused(true);
        })?);
        let st = state.clone();
        subscriptions.push(Subscription::listen(&container, HostEvent::PointerLeave, move |_: web::Event| {
            st.borrow_mut().engine.set_paused(false);
        })?);

        let ids: Vec<(String, web::HtmlElement)> = {
            let s = state.borrow();
            s.engine
                .items()
                .iter()
                .zip(&s.elements)
                .filter_map(|(item, node)| node.as_ref().map(|n| (item.id.clone(), n.root.clone())))
                .collect()
        };
        for (id, el) in ids {
            for (event, hovered) in [(HostEvent::PointerEnter, true), (HostEvent::PointerLeave, false)] {
                let st = state.clone();
                let id = id.clone();
                subscriptions.push(Subscription::listen(&el, event, move |_: web::Event| {
                    let mut s = st.borrow_mut();
                    s.engine.set_hovered(&id, hovered);
                    s.apply_one(&id);
                })?);
            }
        }

        let mut raf_start = raf.clone();
        state.borrow_mut().clock.start(&mut raf_start);
        log::info!(
            "[orbit] mounted on #{} ({} items, hover scale {})",
            container_id,
            state.borrow().engine.items().len(),
            ORBIT_HOVER_SCALE
        );
        Ok(Self {
            state,
            raf,
            subscriptions,
        })
    }
}

impl Effect for OrbitingSkills {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        self.state.borrow_mut().clock.stop(&mut self.raf);
        self.raf.clear();
        log::info!("[orbit] torn down");
    }
}
