//! Keyboard and pointer input from DOM events

use game_core::{InputEvent, InputSource, Key, KeyState};
use glam::IVec2;

/// Map a `KeyboardEvent.key` value to a game key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "p" | "P" => Some(Key::P),
        _ => None,
    }
}

/// Buffers DOM events until the next frame polls them
#[derive(Debug, Default)]
pub struct BrowserInput {
    events: Vec<InputEvent>,
    keys: KeyState,
}

impl BrowserInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the key is one the game uses.
    pub fn key_down(&mut self, name: &str) -> bool {
        let Some(key) = key_from_name(name) else {
            return false;
        };
        // Auto-repeat fires keydown while held; only the first one is a press
        if !self.keys.is_held(key) {
            self.events.push(InputEvent::KeyPressed(key));
        }
        self.keys.press(key);
        true
    }

    /// Handle key up event
    pub fn key_up(&mut self, name: &str) -> bool {
        let Some(key) = key_from_name(name) else {
            return false;
        };
        self.keys.release(key);
        true
    }

    pub fn pointer_click(&mut self, x: i32, y: i32) {
        self.events.push(InputEvent::PointerClick(IVec2::new(x, y)));
    }

    pub fn close(&mut self) {
        self.events.push(InputEvent::Close);
    }

    /// Drop held keys, e.g. when the page loses focus and key-up events are lost
    pub fn release_all(&mut self) {
        self.keys.clear();
    }
}

impl InputSource for BrowserInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn held_keys(&self) -> KeyState {
        self.keys
    }
}
