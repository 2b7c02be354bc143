//! Keyboard aggregation between the host's key events and the frame loop.
//!
//! The host pushes raw key names as they arrive; the game drains them once
//! per frame. Printable keys land in a FIFO keystroke queue, every key
//! (including `Enter`, `Shift`, ...) lands in the per-frame just-pressed set.

use fnv::FnvHashSet;
use std::collections::VecDeque;

#[derive(Default, Debug, Clone)]
pub struct InputState {
    keystrokes: VecDeque<char>,
    just_pressed: FnvHashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key-press notification, `key` being the host's key identifier.
    pub fn key_down(&mut self, key: &str) {
        self.just_pressed.insert(key.to_owned());
        if let Some(c) = keystroke_for_key(key) {
            self.keystrokes.push_back(c);
        }
    }

    /// Next typed character in arrival order, if any.
    pub fn poll_keystroke(&mut self) -> Option<char> {
        self.keystrokes.pop_front()
    }

    pub fn pending_keystrokes(&self) -> usize {
        self.keystrokes.len()
    }

    pub fn clear_keystrokes(&mut self) {
        self.keystrokes.clear();
    }

    pub fn was_just_pressed(&self, key: &str) -> bool {
        self.just_pressed.contains(key)
    }

    /// Forget this frame's just-pressed keys. Queued keystrokes survive.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}

/// Map a raw key name to the character it types: single visible characters
/// only, lower-cased. Named keys such as `"Shift"` yield `None`.
#[inline]
pub fn keystroke_for_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.is_control() {
        return None;
    }
    c.to_lowercase().next()
}
