use crate::frame::WebGame;
use crate::keys;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, game: &Rc<RefCell<WebGame>>) {
    if keys::is_shortcut(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
        return;
    }
    let key = ev.key();
    if keys::suppresses_browser_default(&key) {
        ev.prevent_default();
    }
    let mut game = game.borrow_mut();
    // First key press doubles as the gesture that unlocks audio.
    game.audio().sink().resume();
    game.input_mut().key_down(&key);
}

pub fn wire_keydown(game: Rc<RefCell<WebGame>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &game);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
