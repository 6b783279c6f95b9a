//! Host-independent keyboard and pointer input

use glam::IVec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    P,
}

impl Key {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of keys held down during the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    pub fn clear(&mut self) {
        self.held = 0;
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut state = KeyState::new();
        for key in iter {
            state.press(key);
        }
        state
    }
}

/// Discrete events queued by the host between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window (or page) is closing
    Close,
    /// Primary pointer button pressed at a position in arena pixels
    PointerClick(IVec2),
    /// A key went down this frame (edge, not level)
    KeyPressed(Key),
}

/// Key assignment for paddle control and pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
    pub pause: Key,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::Up,
            right_down: Key::Down,
            pause: Key::P,
        }
    }
}
