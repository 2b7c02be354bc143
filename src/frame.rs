use crate::audio::WebTones;
use crate::canvas::CanvasSurface;
use crate::storage::LocalStore;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use typefall_core::{Game, StrokeFont};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebGame = Game<WebTones, LocalStore>;

pub struct FrameContext {
    pub game: Rc<RefCell<WebGame>>,
    pub surface: CanvasSurface,
    pub glyphs: StrokeFont,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_ms = (now - self.started).as_secs_f64() * 1000.0;

        self.surface.prepare();
        self.game
            .borrow_mut()
            .frame(dt, &mut self.surface, &self.glyphs, now_ms);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
