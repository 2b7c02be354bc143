#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use typefall_core::{Game, GameConfig, StrokeFont};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod keys;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("typefall-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::ensure_canvas(&document)?;
    let surface = canvas::CanvasSurface::new(canvas)?;
    let tones = audio::WebTones::new()?;
    let store = storage::LocalStore::open(&window);

    let config = GameConfig {
        seed: rand::random(),
        ..GameConfig::default()
    };
    let game = Rc::new(RefCell::new(Game::new(config, tones, store)?));

    // Key events are only collected here; the frame loop drains them.
    events::keyboard::wire_keydown(game.clone());

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        game,
        surface,
        glyphs: StrokeFont,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
