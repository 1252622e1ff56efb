use crate::core::params::QueryParams;
use crate::core::{PageParams, Viewport};
use crate::listeners::ListenerSet;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

impl QueryParams for web::UrlSearchParams {
    fn get(&self, key: &str) -> Option<String> {
        web::UrlSearchParams::get(self, key)
    }
}

/// Parameters from `location.search`; defaults when the URL cannot be read.
pub fn page_params(window: &web::Window) -> PageParams {
    let search = window.location().search().unwrap_or_default();
    match web::UrlSearchParams::new_with_str(&search) {
        Ok(query) => PageParams::from_query(&query),
        Err(e) => {
            log::warn!("[params] unreadable query {:?}: {:?}", search, e);
            PageParams::default()
        }
    }
}

/// CSS size of the canvas plus the device pixel ratio.
pub fn viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    let scale = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    Viewport {
        width: rect.width() as f32,
        height: rect.height() as f32,
        scale: scale as f32,
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keeps the canvas backing store at CSS size * devicePixelRatio.
pub fn wire_canvas_resize(listeners: &mut ListenerSet, canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        listeners.add(&window, "resize", move |_: web::Event| {
            sync_canvas_backing_size(&canvas);
        });
    }
}
