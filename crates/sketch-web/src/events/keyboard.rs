use crate::frame::FrameContext;
use sketch_core::KeyTrigger;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_ctx: &Rc<RefCell<FrameContext>>) {
    if ev.repeat() {
        return;
    }
    let Some(key) = KeyTrigger::from_key(&ev.key()) else {
        return;
    };
    if key == KeyTrigger::Space {
        // keep the page from scrolling
        ev.prevent_default();
    }
    match frame_ctx.try_borrow_mut() {
        Ok(mut f) => f.key_pressed(key),
        Err(_) => log::warn!("[keys] context busy; dropping {:?}", key),
    }
}

pub fn wire_global_keydown(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &frame_ctx);
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
    {
        log::error!("[keys] keydown listener error: {:?}", e);
    }
    closure.forget();
}
