use crate::constants::CANVAS_STYLE;
use crate::style;
use showcase_core::OverlayState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (1.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width, height)
}

pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    sync_canvas_to_viewport(&canvas);
    Ok(canvas)
}

/// Size the canvas to the viewport and its backing store to CSS size * devicePixelRatio.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (css_w, css_h) = viewport_size();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{css_w}px"));
    _ = style.set_property("height", &format!("{css_h}px"));
    let (w_px, h_px) = style::backing_size(css_w, css_h, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (css_w, css_h)
}

pub fn find_overlay(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[mount] missing overlay #{}", id);
    }
    el.and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

pub fn apply_overlay(el: &web::HtmlElement, state: &OverlayState) {
    let style = el.style();
    _ = style.set_property("opacity", &style::opacity_css(state.opacity));
    _ = style.set_property("transform", &style::translate_css(state.offset.to_array()));
}
