use glam::DVec2;
use web_sys as web;

/// Pointer position in client (viewport) coordinates, the space
/// `getBoundingClientRect` reports in.
#[inline]
pub fn client_point(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}
