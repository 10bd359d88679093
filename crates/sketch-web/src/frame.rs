use crate::audio::{AudioBank, EndedQueue};
use crate::constants::{MAX_FRAME_DT_SEC, SOUND_BUTTON_ID};
use crate::dom;
use crate::input;
use crate::render::CanvasPainter;
use glam::Vec2;
use instant::Instant;
use sketch_core::{AudioCue, FrameInput, KeyTrigger, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sketch: Box<dyn Sketch>,
    pub painter: CanvasPainter,
    pub bank: Rc<RefCell<AudioBank>>,
    pub ended: EndedQueue,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub last_instant: Instant,
    pub frame: u64,
    cues: Vec<AudioCue>,
    navigating: bool,
}

impl FrameContext {
    pub fn new(
        sketch: Box<dyn Sketch>,
        painter: CanvasPainter,
        bank: Rc<RefCell<AudioBank>>,
        mouse: Rc<RefCell<input::MouseState>>,
    ) -> Self {
        let ended = bank.borrow().ended_queue();
        Self {
            sketch,
            painter,
            bank,
            ended,
            mouse,
            last_instant: Instant::now(),
            frame: 0,
            cues: Vec::new(),
            navigating: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.frame += 1;

        // Clip completions arrive between frames.
        let finished: Vec<_> = self.ended.borrow_mut().drain(..).collect();
        for (clip, generation) in finished {
            if self.bank.borrow_mut().mark_ended(clip, generation) {
                self.sketch.clip_ended(clip, &mut self.cues);
            }
        }

        let input = FrameInput {
            frame: self.frame,
            dt_sec,
            pointer: self.mouse.borrow().pos,
        };
        self.sketch.update(&input, &mut self.cues);
        self.flush_cues();
        self.sketch.draw(&mut self.painter);

        if let Some(url) = self.sketch.navigation() {
            if !self.navigating {
                self.navigating = true;
                log::info!("[frame] leaving for {}", url);
                dom::navigate(url);
            }
        }
    }

    pub fn pointer_pressed(&mut self, at: Vec2) {
        self.sketch.pointer_pressed(at, &mut self.cues);
        self.after_gesture();
    }

    pub fn pointer_entered(&mut self) {
        self.sketch.pointer_entered(&mut self.cues);
        self.after_gesture();
    }

    pub fn key_pressed(&mut self, key: KeyTrigger) {
        self.sketch.key_pressed(key, &mut self.cues);
        self.after_gesture();
    }

    pub fn toggle_sound(&mut self) -> &'static str {
        let label = self.sketch.toggle_sound(&mut self.cues);
        self.flush_cues();
        label
    }

    // Gestures may arm or mute the gate; keep the button in step.
    fn after_gesture(&mut self) {
        self.flush_cues();
        dom::set_text(SOUND_BUTTON_ID, self.sketch.sound_label());
    }

    fn flush_cues(&mut self) {
        if self.cues.is_empty() {
            return;
        }
        let mut bank = self.bank.borrow_mut();
        for cue in self.cues.drain(..) {
            bank.execute(&cue);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match frame_ctx_tick.try_borrow_mut() {
            Ok(mut f) => f.frame(),
            Err(_) => log::warn!("[frame] context busy; skipping frame"),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
