use crate::constants::BEAM_BLUR_FILTER;
use crate::core::{BeamField, BeamOptions, BeamPaint, FrameClock};
use crate::dom;
use crate::events::{HostEvent, Subscription};
use crate::frame::RafScheduler;
use crate::Effect;
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BeamState {
    field: BeamField,
    clock: FrameClock,
    rng: StdRng,
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl BeamState {
    fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.window, &self.canvas);
        // Resizing resets the context state; beams live in backing-store pixels.
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.field.resize(&mut self.rng, w as f64, h as f64);
        log::debug!(
            "[beams] resized to {}x{}, regenerated {} beams",
            w,
            h,
            self.field.beams().len()
        );
    }

    fn frame(&mut self) {
        self.field.step(&mut self.rng);
        let (w, h) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_filter(BEAM_BLUR_FILTER);
        for paint in self.field.paints() {
            draw_beam(&self.ctx, &paint);
        }
    }
}

fn draw_beam(ctx: &web::CanvasRenderingContext2d, paint: &BeamPaint) {
    ctx.save();
    _ = ctx.translate(paint.x, paint.y);
    _ = ctx.rotate(paint.rotation_rad);
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, paint.length);
    for stop in &paint.stops {
        _ = gradient.add_color_stop(stop.offset as f32, &stop.to_string());
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(-paint.width / 2.0, 0.0, paint.width, paint.length);
    ctx.restore();
}

/// Full-viewport beam background painted on a 2D canvas.
pub struct BeamsBackground {
    state: Rc<RefCell<BeamState>>,
    raf: RafScheduler,
    subscriptions: Vec<Subscription>,
}

impl BeamsBackground {
    pub fn attach(canvas_id: &str, options: BeamOptions) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document().ok_or_else(|| anyhow!("no window"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| anyhow!("missing #{}", canvas_id))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", canvas_id, e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;

        let state = Rc::new(RefCell::new(BeamState {
            field: BeamField::new(options),
            clock: FrameClock::default(),
            rng: StdRng::from_entropy(),
            window: window.clone(),
            canvas,
            ctx,
        }));
        state.borrow_mut().resize();

        let raf = RafScheduler::new(window.clone());
        {
            let state = state.clone();
            let mut raf_tick = raf.clone();
            raf.set_callback(move |ts| {
                let mut st = state.borrow_mut();
                if st.clock.tick(ts, &mut raf_tick).is_some() {
                    st.frame();
                }
            });
        }

        let state_resize = state.clone();
        let resize = Subscription::listen(&window, HostEvent::Resize, move |_: web::Event| {
            state_resize.borrow_mut().resize();
        })?;

        let mut raf_start = raf.clone();
        state.borrow_mut().clock.start(&mut raf_start);
        log::info!(
            "[beams] mounted on #{} ({} beams, {:?})",
            canvas_id,
            options.beam_count(),
            options.intensity
        );
        Ok(Self {
            state,
            raf,
            subscriptions: vec![resize],
        })
    }
}

impl Effect for BeamsBackground {
    fn teardown(&mut self) {
        self.subscriptions.clear();
        self.state.borrow_mut().clock.stop(&mut self.raf);
        self.raf.clear();
        log::info!("[beams] torn down");
    }
}
