#![cfg(target_arch = "wasm32")]
use sketch_core::{Sketch, SketchKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, POPUP_OVERLAY_ID, SKETCH_ATTR, SOUND_BUTTON_ID};
use frame::FrameContext;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<FrameContext>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sketch-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn page_sketch(canvas: &web::HtmlCanvasElement) -> SketchKind {
    match canvas.get_attribute(SKETCH_ATTR) {
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{}; falling back to the gallery", e);
            SketchKind::Gallery
        }),
        None => SketchKind::Gallery,
    }
}

// Fresh randomness per visit.
fn visit_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let salt = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (salt << 32)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let kind = page_sketch(&canvas);
    let size = dom::size_canvas(&canvas, kind.canvas_size());
    let sketch: Box<dyn Sketch> = sketch_core::build(kind, size, visit_seed());
    log::info!("[init] {} on a {}x{} canvas", kind, size.x, size.y);

    let painter = render::CanvasPainter::new(&canvas)?;
    let bank = Rc::new(RefCell::new(audio::AudioBank::new()?));
    // Clips are ready before the first frame so early cues are not lost.
    audio::load_clips(&bank, sketch.clips()).await;

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        sketch,
        painter,
        bank,
        mouse.clone(),
    )));
    APP.with(|app| *app.borrow_mut() = Some(frame_ctx.clone()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        mouse,
        frame_ctx: frame_ctx.clone(),
    });
    events::wire_global_keydown(&window, frame_ctx.clone());
    dom::listen(&document, POPUP_OVERLAY_ID, "click", close_info_popup);

    frame::start_loop(frame_ctx);
    Ok(())
}

/// Sound button handler; updates the button label in place.
#[wasm_bindgen]
pub fn toggle_sound() {
    let Some(app) = APP.with(|app| app.borrow().clone()) else {
        log::warn!("[sound] toggle before the sketch is ready");
        return;
    };
    let label = match app.try_borrow_mut() {
        Ok(mut f) => f.toggle_sound(),
        Err(_) => {
            log::warn!("[sound] context busy; toggle dropped");
            return;
        }
    };
    dom::set_text(SOUND_BUTTON_ID, label);
}

#[wasm_bindgen]
pub fn open_info_popup() {
    if let Some(document) = dom::document() {
        overlay::show(&document);
    }
}

#[wasm_bindgen]
pub fn close_info_popup() {
    if let Some(document) = dom::document() {
        if overlay::is_shown(&document) {
            overlay::hide(&document);
        }
    }
}
