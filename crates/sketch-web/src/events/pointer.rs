use crate::frame::FrameContext;
use crate::input::{self, MouseState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<MouseState>>,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
}

fn listen(target: &web::EventTarget, event: &str, closure: Closure<dyn FnMut(web::MouseEvent)>) {
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[pointer] {} listener error: {:?}", event, e);
    }
    closure.forget();
}

// First sighting of the pointer over the page.
fn note_entered(mouse: &Rc<RefCell<MouseState>>, frame_ctx: &Rc<RefCell<FrameContext>>) {
    {
        let mut ms = mouse.borrow_mut();
        if ms.entered {
            return;
        }
        ms.entered = true;
    }
    match frame_ctx.try_borrow_mut() {
        Ok(mut f) => f.pointer_entered(),
        Err(_) => log::warn!("[pointer] context busy; entry not delivered"),
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    // mousemove on the window so positions off the canvas still register
    {
        let canvas = w.canvas.clone();
        let mouse = w.mouse.clone();
        let frame_ctx = w.frame_ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            mouse.borrow_mut().pos = Some(input::pointer_canvas_px(&ev, &canvas));
            note_entered(&mouse, &frame_ctx);
        }) as Box<dyn FnMut(_)>);
        listen(&window, "mousemove", closure);
    }

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let mouse = w.mouse.clone();
        let frame_ctx = w.frame_ctx.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            note_entered(&mouse, &frame_ctx);
        }) as Box<dyn FnMut(_)>);
        listen(&root, "mouseenter", closure);
    }

    {
        let canvas = w.canvas.clone();
        let mouse = w.mouse.clone();
        let frame_ctx = w.frame_ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas);
            mouse.borrow_mut().pos = Some(at);
            match frame_ctx.try_borrow_mut() {
                Ok(mut f) => f.pointer_pressed(at),
                Err(_) => log::warn!("[pointer] context busy; dropping press"),
            }
        }) as Box<dyn FnMut(_)>);
        listen(&w.canvas, "mousedown", closure);
    }
}
