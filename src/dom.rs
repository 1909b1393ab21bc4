use crate::core::Rect;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Children of `root` matching `selector`, skipping non-HTML nodes.
pub fn html_elements(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// CSS viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Size the canvas backing store to the viewport times devicePixelRatio and
/// pin its CSS size to the viewport. Returns the backing size in pixels.
pub fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    let (css_w, css_h) = viewport_size(window);
    let w_px = (css_w * dpr) as u32;
    let h_px = (css_h * dpr) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", css_w));
    set_style(canvas, "height", &format!("{}px", css_h));
    (w_px, h_px)
}
