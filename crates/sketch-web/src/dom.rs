use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page document, when running in a browser window.
pub fn document() -> Option<web::Document> {
    web::window()?.document()
}

/// Attach `handler` to `event` on the element with `element_id`. Pages that
/// omit the element simply get no listener.
pub fn listen(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[dom] no #{}; {} listener skipped", element_id, event);
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] #{} {} listener failed: {:?}", element_id, event, e);
    }
    closure.forget();
}

/// Replace the text of an element owned by the page, if present.
pub fn set_text(element_id: &str, text: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(element_id)) {
        el.set_text_content(Some(text));
    }
}

/// Size the canvas backing store: fixed sketches use their own size, the
/// gallery follows the window.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, fixed: Option<Vec2>) -> Vec2 {
    let size = fixed.unwrap_or_else(|| {
        web::window()
            .map(|w| {
                let px = |v: Result<wasm_bindgen::JsValue, _>| {
                    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
                };
                Vec2::new(px(w.inner_width()), px(w.inner_height()))
            })
            .unwrap_or(Vec2::new(canvas.width() as f32, canvas.height() as f32))
    });
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    size
}

pub fn navigate(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::warn!("navigation to {} failed: {:?}", url, e);
        }
    }
}
